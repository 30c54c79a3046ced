use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use quizconv_core::extraction::pdftotext::PdftotextExtractor;
use quizconv_core::extraction::PdfExtractor;
use quizconv_core::model::SourceFormat;

use crate::dialog::Dialog;

const HELP: &str = "\
Commands:
  open <path>   choose an .xlsx, .docx or .pdf file
  convert       convert the chosen file to JSON
  show          show the chosen file
  help          show this help
  quit          leave the shell
";

/// Interactive conversion session: one selected file, one conversion per
/// `convert` command. Failures are reported as dialogs and never end the
/// session.
pub struct Shell<'a> {
    extractor: &'a dyn PdfExtractor,
    selected: Option<PathBuf>,
}

#[derive(Debug, PartialEq, Eq)]
enum Step {
    Continue,
    Quit,
}

impl<'a> Shell<'a> {
    pub fn new(extractor: &'a dyn PdfExtractor) -> Self {
        Shell {
            extractor,
            selected: None,
        }
    }

    pub fn selected(&self) -> Option<&Path> {
        self.selected.as_deref()
    }

    /// Read commands from `input` until it is exhausted or `quit` is given.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        write!(out, "{}", HELP)?;
        self.write_selection(out)?;
        write!(out, "> ")?;
        out.flush()?;

        for line in input.lines() {
            let line = line?;
            if self.handle(line.trim(), out)? == Step::Quit {
                return Ok(());
            }
            write!(out, "> ")?;
            out.flush()?;
        }
        writeln!(out)?;
        Ok(())
    }

    fn handle<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Step> {
        let (command, arg) = match line.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, arg.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "open" => {
                if let Some(dialog) = self.open(Path::new(strip_quotes(arg))) {
                    write!(out, "{dialog}")?;
                }
                self.write_selection(out)?;
            }
            "convert" | "generate" => write!(out, "{}", self.convert())?,
            "show" => self.write_selection(out)?,
            "help" | "?" => write!(out, "{}", HELP)?,
            "quit" | "exit" | "q" => return Ok(Step::Quit),
            other => writeln!(out, "Unknown command '{other}'. Type 'help' for commands.")?,
        }
        Ok(Step::Continue)
    }

    /// Select a file. Returns the dialog to show when the file is rejected;
    /// the previous selection is kept in that case.
    fn open(&mut self, path: &Path) -> Option<Dialog> {
        if path.as_os_str().is_empty() {
            return Some(Dialog::error("Usage: open <path>"));
        }
        if SourceFormat::from_path(path).is_err() {
            return Some(Dialog::unsupported_format());
        }
        if !path.is_file() {
            return Some(Dialog::file_not_found(path));
        }
        tracing::debug!(path = %path.display(), "selected file");
        self.selected = Some(path.to_path_buf());
        None
    }

    fn convert(&self) -> Dialog {
        let Some(path) = self.selected.as_deref() else {
            return Dialog::missing_file();
        };
        let outcome = quizconv_core::convert(path, self.extractor);
        if let Err(e) = &outcome {
            tracing::warn!(path = %path.display(), error = %e, "conversion failed");
        }
        Dialog::from_outcome(&outcome)
    }

    fn write_selection<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match &self.selected {
            Some(path) => writeln!(out, "File: {}", path.display()),
            None => writeln!(out, "File: (none selected)"),
        }
    }
}

/// Paths dragged into a terminal often arrive quoted.
fn strip_quotes(arg: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = arg.strip_prefix(quote).and_then(|a| a.strip_suffix(quote)) {
            return inner;
        }
    }
    arg
}

pub fn run() -> Result<(), Dialog> {
    let extractor = PdftotextExtractor::new();
    if !PdftotextExtractor::is_available() {
        tracing::warn!("pdftotext not found on PATH; PDF conversion will fail");
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    Shell::new(&extractor)
        .run(stdin.lock(), &mut stdout)
        .map_err(|e| Dialog::error(format!("Shell I/O failed:\n{e}")))
}
