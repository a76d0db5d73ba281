//! Printers over a shared writer
//!
//! A [`Printer`] owns its destination and formatting choices; there is
//! no process-wide default to mutate. Clones share the same writer.

use std::fmt::{self, Display, Write as _};
use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Where a [`Printer`] built from config writes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PrintTarget {
    #[default]
    Stdout,
    Stderr,
}

/// Printer configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrinterConfig {
    pub target: PrintTarget,
    /// Placed between items
    pub separator: String,
    /// Appended by `println`
    pub terminator: String,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            target: PrintTarget::Stdout,
            separator: " ".to_string(),
            terminator: "\n".to_string(),
        }
    }
}

type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

/// Prints displayable items to a shared writer
#[derive(Clone)]
pub struct Printer {
    writer: SharedWriter,
    config: PrinterConfig,
}

impl Printer {
    /// Printer writing to the configured standard stream
    pub fn new(config: PrinterConfig) -> Self {
        let writer: Box<dyn Write + Send> = match config.target {
            PrintTarget::Stdout => Box::new(io::stdout()),
            PrintTarget::Stderr => Box::new(io::stderr()),
        };
        Self {
            writer: Arc::new(Mutex::new(writer)),
            config,
        }
    }

    /// Printer writing to `writer`; `config.target` is ignored
    pub fn from_writer<W: Write + Send + 'static>(writer: W, config: PrinterConfig) -> Self {
        let writer: Box<dyn Write + Send> = Box::new(writer);
        Self {
            writer: Arc::new(Mutex::new(writer)),
            config,
        }
    }

    pub fn config(&self) -> &PrinterConfig {
        &self.config
    }

    /// Write the items joined by the separator
    pub fn print<D: Display>(&self, items: &[D]) -> io::Result<()> {
        let line = self.join(items);
        self.emit(&line)
    }

    /// Write the items joined by the separator, then the terminator
    pub fn println<D: Display>(&self, items: &[D]) -> io::Result<()> {
        let mut line = self.join(items);
        line.push_str(&self.config.terminator);
        self.emit(&line)
    }

    /// Substitute each `{}` in `format` with the next argument
    ///
    /// `{{` and `}}` write literal braces. Placeholders without an argument
    /// are written as `{}`; surplus arguments are ignored.
    pub fn printf(&self, format: &str, args: &[&dyn Display]) -> io::Result<()> {
        let line = substitute(format, args).map_err(io::Error::other)?;
        self.emit(&line)
    }

    /// Closure form of [`Printer::print`]
    pub fn printer<D: Display>(&self) -> impl Fn(&[D]) -> io::Result<()> {
        let printer = self.clone();
        move |items| printer.print(items)
    }

    /// Closure form of [`Printer::println`]
    pub fn printerln<D: Display>(&self) -> impl Fn(&[D]) -> io::Result<()> {
        let printer = self.clone();
        move |items| printer.println(items)
    }

    /// Closure form of [`Printer::printf`] with the format fixed
    pub fn printerf(&self, format: impl Into<String>) -> impl Fn(&[&dyn Display]) -> io::Result<()> {
        let printer = self.clone();
        let format = format.into();
        move |args| printer.printf(&format, args)
    }

    fn join<D: Display>(&self, items: &[D]) -> String {
        let mut line = String::new();
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                line.push_str(&self.config.separator);
            }
            // writing into a String cannot fail
            let _ = write!(line, "{item}");
        }
        line
    }

    fn emit(&self, text: &str) -> io::Result<()> {
        let mut writer = self.writer.lock();
        writer.write_all(text.as_bytes())?;
        writer.flush()
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrinterConfig::default())
    }
}

impl fmt::Debug for Printer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Printer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn substitute(format: &str, args: &[&dyn Display]) -> Result<String, fmt::Error> {
    let mut out = String::with_capacity(format.len());
    let mut args = args.iter();
    let mut missing = 0usize;
    let mut chars = format.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, chars.peek()) {
            ('{', Some('{')) | ('}', Some('}')) => {
                chars.next();
                out.push(c);
            }
            ('{', Some('}')) => {
                chars.next();
                match args.next() {
                    Some(arg) => write!(out, "{arg}")?,
                    None => {
                        missing += 1;
                        out.push_str("{}");
                    }
                }
            }
            _ => out.push(c),
        }
    }

    if missing > 0 {
        tracing::warn!(format, missing, "printf: placeholders without arguments");
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Capture {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock()).into_owned()
        }
    }

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture(config: PrinterConfig) -> (Printer, Capture) {
        let buf = Capture::default();
        (Printer::from_writer(buf.clone(), config), buf)
    }

    #[test]
    fn test_print_and_println() {
        let (printer, buf) = capture(PrinterConfig::default());
        printer.print(&[1, 2, 3]).unwrap();
        printer.println(&["a", "b"]).unwrap();
        printer.println::<i32>(&[]).unwrap();
        assert_eq!(buf.text(), "1 2 3a b\n\n");
    }

    #[test]
    fn test_custom_separator_and_terminator() {
        let config = PrinterConfig {
            separator: ", ".to_string(),
            terminator: ";\n".to_string(),
            ..Default::default()
        };
        let (printer, buf) = capture(config);
        printer.println(&[1.5, 2.5]).unwrap();
        assert_eq!(buf.text(), "1.5, 2.5;\n");
    }

    #[test]
    fn test_printf() {
        let (printer, buf) = capture(PrinterConfig::default());
        printer.printf("{} + {} = {}\n", &[&1, &2, &3]).unwrap();
        printer.printf("{{{}}}", &[&"x"]).unwrap();
        printer.printf(" {} {}", &[&7]).unwrap();
        printer.printf(" {}", &[&8, &9]).unwrap();
        assert_eq!(buf.text(), "1 + 2 = 3\n{x} 7 {} 8");
    }

    #[test]
    fn test_closure_factories_share_writer() {
        let (printer, buf) = capture(PrinterConfig::default());
        let p = printer.printer::<&str>();
        let pln = printer.printerln::<&str>();
        let pf = printer.printerf("<{}>");

        p(&["x", "y"]).unwrap();
        pln(&["z"]).unwrap();
        pf(&[&42]).unwrap();
        pf(&[&"w"]).unwrap();
        assert_eq!(buf.text(), "x yz\n<42><w>");
    }

    #[test]
    fn test_default_config() {
        let config = PrinterConfig::default();
        assert_eq!(config.target, PrintTarget::Stdout);
        assert_eq!(config.separator, " ");
        assert_eq!(config.terminator, "\n");

        let printer = Printer::new(PrinterConfig {
            target: PrintTarget::Stderr,
            ..Default::default()
        });
        assert_eq!(printer.config().target, PrintTarget::Stderr);
        assert!(format!("{printer:?}").contains("Stderr"));
    }
}
