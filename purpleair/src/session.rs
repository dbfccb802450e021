//! Interactive menu session.
//!
//! The session owns the record store and drives it from line-oriented
//! input. It is generic over its input and output so tests can script a
//! whole conversation.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::bail;
use console::style;
use purpleairlib::{render_table, RecordStore, Stat, LOAD_DATA_FIRST};
use tracing::{error, info};

/// Longest accepted menu header, in characters
pub const MAX_HEADER_LEN: usize = 30;

/// Check a menu header against [`MAX_HEADER_LEN`]
pub fn validate_header(header: &str) -> anyhow::Result<&str> {
    if header.chars().count() > MAX_HEADER_LEN {
        bail!(
            "header is {} characters, at most {} allowed",
            header.chars().count(),
            MAX_HEADER_LEN
        );
    }
    Ok(header)
}

/// A main menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Table(Stat),
    Filters,
    Load,
    Quit,
}

impl MenuChoice {
    fn from_number(number: i64) -> Option<Self> {
        match number {
            1 => Some(MenuChoice::Table(Stat::Avg)),
            2 => Some(MenuChoice::Table(Stat::Min)),
            3 => Some(MenuChoice::Table(Stat::Max)),
            4 => Some(MenuChoice::Filters),
            5 => Some(MenuChoice::Load),
            9 => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

/// One interactive session over a single record store
pub struct Session<R, W> {
    store: RecordStore,
    data_path: PathBuf,
    header: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(data_path: impl Into<PathBuf>, input: R, output: W) -> Self {
        Self {
            store: RecordStore::new(),
            data_path: data_path.into(),
            header: String::new(),
            input,
            output,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Consume the session, returning its output sink
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Greet the user, settle the header, then serve the main menu until
    /// the user quits or input runs out.
    ///
    /// `name` and `header` skip their prompts when given. An empty name
    /// ends the session before the menu is shown.
    pub fn run(&mut self, name: Option<String>, header: Option<String>) -> anyhow::Result<()> {
        let name = match name {
            Some(name) => name,
            None => match self.prompt("Please type in your name: ")? {
                Some(name) => name,
                None => return Ok(()),
            },
        };
        writeln!(
            self.output,
            "Hello {}, welcome to the air quality database.",
            name
        )?;

        if !self.choose_header(header)? {
            return Ok(());
        }

        if name.is_empty() {
            return Ok(());
        }

        loop {
            self.print_menu()?;
            let Some(answer) = self.prompt("what is your choice? ")? else {
                break;
            };
            let number = match answer.trim().parse::<i64>() {
                Ok(number) => number,
                Err(_) => {
                    writeln!(self.output, "Please enter a number.")?;
                    continue;
                }
            };

            match MenuChoice::from_number(number) {
                Some(MenuChoice::Table(stat)) => {
                    let table = render_table(&self.store, stat);
                    write!(self.output, "{}", table)?;
                }
                Some(MenuChoice::Filters) => self.manage_filters()?,
                Some(MenuChoice::Load) => self.load_data()?,
                Some(MenuChoice::Quit) => {
                    writeln!(self.output, "Thank you for using our database! Goodbye.")?;
                    break;
                }
                None => writeln!(self.output, "Please select a number listed in the menu.")?,
            }
        }

        Ok(())
    }

    /// Use `preset` if it is a valid header, otherwise prompt until one is.
    /// Returns `false` if input ran out first.
    fn choose_header(&mut self, preset: Option<String>) -> anyhow::Result<bool> {
        if let Some(header) = preset {
            match validate_header(&header) {
                Ok(_) => {
                    self.header = header;
                    return Ok(true);
                }
                Err(e) => info!("ignoring --header: {}", e),
            }
        }

        loop {
            let Some(header) = self.prompt("Enter a header for the menu: ")? else {
                return Ok(false);
            };
            if validate_header(&header).is_ok() {
                self.header = header;
                return Ok(true);
            }
            writeln!(
                self.output,
                "Please enter a header less than or equal to {} characters.",
                MAX_HEADER_LEN
            )?;
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", style(&self.header).bold())?;
        writeln!(self.output, "Main Menu")?;
        for (number, stat) in [(1, Stat::Avg), (2, Stat::Min), (3, Stat::Max)] {
            writeln!(
                self.output,
                "{} - Print {} Particulate Concentration by Zip Code and Time",
                number,
                stat.description()
            )?;
        }
        writeln!(self.output, "4 - Adjust Zip Code Filters")?;
        writeln!(self.output, "5 - Load Data")?;
        writeln!(self.output, "9 - Quit")
    }

    /// Load the data file. A failed load is reported and leaves any
    /// previously loaded data in place.
    fn load_data(&mut self) -> io::Result<()> {
        match self.store.load_path(&self.data_path) {
            Ok(count) => {
                info!(count, "loaded {}", self.data_path.display());
                writeln!(self.output, "Number of lines loaded: {}", count)
            }
            Err(e) => {
                error!("load failed: {}", e);
                writeln!(self.output, "Error: {}", e)
            }
        }
    }

    /// Toggle zip codes by their 1-based position in the listing until the
    /// user enters an empty line.
    fn manage_filters(&mut self) -> io::Result<()> {
        let zip_codes: Vec<String> = self
            .store
            .zip_flags()
            .into_iter()
            .map(|flag| flag.zip_code)
            .collect();

        if zip_codes.is_empty() {
            return writeln!(self.output, "{}", LOAD_DATA_FIRST);
        }

        loop {
            writeln!(self.output, "The following labels are in the dataset.")?;
            for (number, flag) in self.store.zip_flags().iter().enumerate() {
                let mode = if flag.active { "ACTIVE" } else { "INACTIVE" };
                writeln!(self.output, "{}: {}{:>10}", number + 1, flag.zip_code, mode)?;
            }

            let Some(answer) = self.prompt(
                "Please select an item to toggle or press enter/return when you are finished.",
            )?
            else {
                return Ok(());
            };
            if answer.is_empty() {
                return Ok(());
            }

            let number = match answer.trim().parse::<usize>() {
                Ok(number) => number,
                Err(_) => {
                    writeln!(self.output, "Please enter a number listed in the menu.")?;
                    continue;
                }
            };

            match number.checked_sub(1).and_then(|index| zip_codes.get(index)) {
                Some(zip_code) => {
                    // Listed zip codes always come from the store
                    if let Err(e) = self.store.toggle(zip_code) {
                        error!("{}", e);
                        writeln!(self.output, "Error: {}", e)?;
                    }
                }
                None => writeln!(self.output, "Please select a number listed in the menu.")?,
            }
        }
    }

    /// Print `text` without a newline and read one line of input, without
    /// its line terminator. `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
