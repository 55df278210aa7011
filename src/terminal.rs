use std::io::{self, IsTerminal, Write};

use termcolor::{BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

const RED_COLOR: Color = Color::Rgb(255, 95, 0);

fn color_choice() -> ColorChoice {
    if io::stderr().is_terminal() {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    }
}

#[inline]
pub fn get_stderr_output() -> BufferWriter {
    BufferWriter::stderr(color_choice())
}

/// Writes `error: <message>`, with the whole cause chain on one line.
pub fn write_error<W: WriteColor>(stderr: &mut W, err: &anyhow::Error) -> io::Result<()> {
    let mut color_spec = ColorSpec::new();
    color_spec.set_fg(Some(RED_COLOR)).set_bold(true);

    stderr.set_color(&color_spec)?;
    write!(stderr, "error")?;

    stderr.reset()?;
    writeln!(stderr, ": {err:#}")
}

#[cfg(test)]
mod tests {
    use termcolor::{Ansi, NoColor};

    use super::*;

    #[test]
    fn plain_error_line() {
        let err = anyhow::anyhow!("no identity").context("gethostname");

        let mut stderr = NoColor::new(Vec::new());

        write_error(&mut stderr, &err).unwrap();

        assert_eq!("error: gethostname: no identity\n", String::from_utf8(stderr.into_inner()).unwrap());
    }

    #[test]
    fn colored_label() {
        let err = anyhow::anyhow!("no identity");

        let mut stderr = Ansi::new(Vec::new());

        write_error(&mut stderr, &err).unwrap();

        let s = String::from_utf8(stderr.into_inner()).unwrap();

        assert!(s.starts_with("\x1b["));
        assert!(s.ends_with(": no identity\n"));
    }
}
