#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::io::{BufRead, Write};

use anyhow::{Result, anyhow, bail};
use itertools::Itertools;
use tabled::{
    Table,
    settings::{Alignment, Modify, Panel, Style, object::Rows},
};

use crate::{record::GradeRecord, stats, store::Store};

/// Menu entries, rendered in order as options 1 through 4.
const MENU: [&str; 4] = [
    "Input grades",
    "Display grades",
    "Clear existing grades",
    "Exit application",
];

/// Printed whenever the menu selection is not a number between 1 and 4.
const BAD_SELECTION: &str =
    "Unable to parse input! Please make sure your value is between 1-4 exclusively!";

/// The interactive menu loop over a [`Store`].
///
/// Generic over its input and output streams so the whole shell can be
/// driven from in-memory buffers in tests; the binary hands it locked
/// stdin and stdout.
pub struct Shell<R, W> {
    /// Where answers are read from, one line per prompt.
    input:  R,
    /// Where prompts, tables, and messages are written.
    output: W,
    /// The grade list every action operates on.
    store:  Store,
}

/// Session-wide answer to the "are credits/costs universal?" questions:
/// either one value shared by every record entered, or a prompt per record.
#[derive(Clone, Copy)]
enum SessionValue<T> {
    /// The same value applies to every record in the session.
    Uniform(T),
    /// Ask again for each record.
    PerRecord,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a shell over the given streams and store.
    pub fn new(input: R, output: W, store: Store) -> Self {
        Self {
            input,
            output,
            store,
        }
    }

    /// Consumes the shell and hands back its output stream and store, so
    /// tests can inspect what was printed and what was recorded.
    pub fn into_parts(self) -> (W, Store) {
        (self.output, self.store)
    }

    /// Runs the menu loop until the user exits or input ends.
    ///
    /// A failure inside one action (a malformed number, a broken grade
    /// file) aborts that action with a visible message and returns to the
    /// menu; it never takes the whole process down.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.render_menu()?;

            let Some(line) = self.read_line()? else {
                return Ok(());
            };

            match line.trim().parse::<u8>().unwrap_or(0) {
                1 => {
                    if let Err(e) = self.input_session() {
                        writeln!(self.output, "{e:#}")?;
                    }
                }
                2 => self.display()?,
                3 => {
                    if let Err(e) = self.confirm_clear() {
                        writeln!(self.output, "{e:#}")?;
                    }
                }
                4 => return Ok(()),
                _ => writeln!(self.output, "{BAD_SELECTION}")?,
            }

            writeln!(self.output)?;
        }
    }

    /// Prints the numbered menu.
    fn render_menu(&mut self) -> Result<()> {
        let menu = MENU
            .iter()
            .enumerate()
            .map(|(i, entry)| format!("{}. {entry}", i + 1))
            .join("\n");
        writeln!(self.output, "{menu}")?;
        Ok(())
    }

    /// Runs one grade-entry session: captures the session-wide credit and
    /// cost answers, then appends records until the user types `done`, then
    /// saves and shows the updated statistics.
    fn input_session(&mut self) -> Result<()> {
        self.render_grades()?;

        let credits = self.ask_session_value::<u32>(
            "Are credits universal? Input number of credits or 'n' for no.",
            "credit count",
        )?;
        let cost = self.ask_session_value::<f64>(
            "Are costs universal? Input costs or 'n' for no.",
            "cost",
        )?;

        loop {
            let token = self.prompt("Please input grade, or type 'done' to finish.")?;
            if token.eq_ignore_ascii_case("done") {
                break;
            }
            let percent: f64 = token
                .parse()
                .map_err(|_| anyhow!("could not read `{token}` as a grade percentage"))?;

            let name = self.prompt("Please input class name:")?;

            let cost = match cost {
                SessionValue::Uniform(cost) => cost,
                SessionValue::PerRecord => {
                    let token = self.prompt("Please input class costs:")?;
                    token
                        .parse()
                        .map_err(|_| anyhow!("could not read `{token}` as a cost"))?
                }
            };

            let credits = match credits {
                SessionValue::Uniform(credits) => credits,
                SessionValue::PerRecord => {
                    let token = self.prompt("Please input credits:")?;
                    token
                        .parse()
                        .map_err(|_| anyhow!("could not read `{token}` as a credit count"))?
                }
            };

            self.store.push(
                GradeRecord::builder()
                    .name(name)
                    .cost(cost)
                    .percent(percent)
                    .credits(credits)
                    .build(),
            );
        }

        self.store.save()?;
        self.display()
    }

    /// Asks one of the "is this universal for the session?" questions. An
    /// answer starting with `n` or `N` means per-record prompting; anything
    /// else must parse as a value of type `T`.
    fn ask_session_value<T: std::str::FromStr>(
        &mut self,
        question: &str,
        what: &str,
    ) -> Result<SessionValue<T>> {
        let answer = self.prompt(question)?;
        if answer.starts_with(['n', 'N']) {
            return Ok(SessionValue::PerRecord);
        }
        let value = answer
            .parse()
            .map_err(|_| anyhow!("could not read `{answer}` as a {what}"))?;
        Ok(SessionValue::Uniform(value))
    }

    /// Renders the grade table followed by the computed statistics, or a
    /// nudge to enter grades when there are none yet.
    fn display(&mut self) -> Result<()> {
        if self.store.is_empty() {
            writeln!(self.output, "No grades exist. Please input your grades.")?;
            return Ok(());
        }

        self.render_grades()?;

        match stats::summarize(self.store.records()) {
            Ok(summary) => {
                writeln!(self.output, "Your CGPA = {:.2}", summary.cgpa)?;
                writeln!(self.output, "Your 4.0 GPA = {:.2}", summary.weighted_gpa)?;
                writeln!(self.output, "Simple 4 GPA = {}", summary.simple_gpa)?;
                writeln!(self.output)?;
                writeln!(self.output, "Total credits: {}", summary.total_credits)?;
                writeln!(self.output, "Total cost: ({:.2})", summary.total_cost)?;
            }
            Err(e) => writeln!(self.output, "{e}")?,
        }

        Ok(())
    }

    /// Prints the current records as an aligned table; prints nothing when
    /// the store is empty.
    fn render_grades(&mut self) -> Result<()> {
        if self.store.is_empty() {
            return Ok(());
        }

        let table = Table::new(self.store.records())
            .with(Panel::header("Grades"))
            .with(
                Modify::new(Rows::first())
                    .with(Alignment::center())
                    .with(Alignment::center_vertical()),
            )
            .with(Style::modern())
            .to_string();
        writeln!(self.output, "{table}")?;
        Ok(())
    }

    /// Asks for confirmation, then clears the store and deletes the grade
    /// file. Anything other than a `y`/`n` answer re-asks the question.
    fn confirm_clear(&mut self) -> Result<()> {
        loop {
            writeln!(
                self.output,
                "Are you sure you want to clear all grades? This cannot be undone.\n(y/n)"
            )?;

            let Some(answer) = self.read_line()? else {
                bail!("input ended before the clear was confirmed");
            };

            match answer.trim().chars().next().map(|c| c.to_ascii_lowercase()) {
                Some('y') => {
                    self.store.clear()?;
                    writeln!(self.output, "Cleared.")?;
                    return Ok(());
                }
                Some('n') => {
                    writeln!(self.output, "Canceled.")?;
                    return Ok(());
                }
                _ => {}
            }
        }
    }

    /// Writes a prompt line and reads the trimmed answer. Running out of
    /// input mid-question aborts the current action.
    fn prompt(&mut self, message: &str) -> Result<String> {
        writeln!(self.output, "{message}")?;
        match self.read_line()? {
            Some(line) => Ok(line.trim().to_string()),
            None => bail!("input ended before an answer was given"),
        }
    }

    /// Reads one line from the input stream; `None` means the stream is
    /// exhausted.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
