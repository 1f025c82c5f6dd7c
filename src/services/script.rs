//! Line-oriented command scripts.
//!
//! Each non-blank, non-comment line names one command followed by its
//! whitespace-separated arguments. A command that fails is reported and
//! the script carries on; an unrecognised command name aborts the run.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use stitch_engine::{Command, Engine, Palette, Rgb};

use crate::error::StitchError;
use crate::services::codec::{read_png, write_png};

/// One parsed script line.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Load(PathBuf),
    SaveImage(PathBuf),
    SavePattern(PathBuf),
    Run(Command),
}

const COMMAND_NAMES: &[&str] = &[
    "load",
    "save",
    "reload",
    "blur",
    "sharpen",
    "greyscale",
    "sepia",
    "colordither",
    "greyscaledither",
    "mosaic",
    "pixelate",
    "pattern",
    "swap",
    "remove",
    "custom",
];

/// Parse a single line.
///
/// `Ok(None)` for blank and comment lines. The inner `Err` carries the
/// command name and the reason its arguments were rejected; the outer
/// `Err` is an unknown command.
#[allow(clippy::type_complexity)]
pub fn parse_line(line: &str) -> Result<Option<(&'static str, Result<Step, String>)>, StitchError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut tokens = line.split_whitespace();
    let word = tokens.next().unwrap_or_default();
    let name = COMMAND_NAMES
        .iter()
        .copied()
        .find(|known| known.eq_ignore_ascii_case(word))
        .ok_or_else(|| StitchError::UnknownCommand(word.to_string()))?;

    let args: Vec<&str> = tokens.collect();
    Ok(Some((name, parse_step(name, &args))))
}

fn parse_step(name: &str, args: &[&str]) -> Result<Step, String> {
    let step = match name {
        "load" => Step::Load(PathBuf::from(single(args)?)),
        "save" => {
            let path = PathBuf::from(single(args)?);
            let is_text = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
            if is_text {
                Step::SavePattern(path)
            } else {
                Step::SaveImage(path)
            }
        }
        "reload" => none(args, Command::Reload)?,
        "blur" => none(args, Command::Blur)?,
        "sharpen" => none(args, Command::Sharpen)?,
        "greyscale" => none(args, Command::Greyscale)?,
        "sepia" => none(args, Command::Sepia)?,
        "pattern" => none(args, Command::Pattern)?,
        "colordither" => Step::Run(Command::ColorDither(number(args)?)),
        "greyscaledither" => Step::Run(Command::GreyscaleDither(number(args)?)),
        "mosaic" => Step::Run(Command::Mosaic(number(args)?)),
        "pixelate" => Step::Run(Command::Pixelate(number(args)?)),
        "swap" => match args {
            [old, new] => Step::Run(Command::Swap {
                old: color(old)?,
                new: color(new)?,
            }),
            _ => return Err(format!("expected 2 colors, got {} arguments", args.len())),
        },
        "remove" => Step::Run(Command::Remove(color(single(args)?)?)),
        "custom" => {
            let symbols: Vec<char> = args.iter().flat_map(|arg| arg.chars()).collect();
            if symbols.is_empty() {
                return Err("expected at least one symbol".to_string());
            }
            Step::Run(Command::Custom(symbols))
        }
        other => return Err(format!("unhandled command {}", other)),
    };
    Ok(step)
}

fn none(args: &[&str], command: Command) -> Result<Step, String> {
    if args.is_empty() {
        Ok(Step::Run(command))
    } else {
        Err(format!("unexpected arguments: {}", args.join(" ")))
    }
}

fn single<'a>(args: &[&'a str]) -> Result<&'a str, String> {
    match args {
        [arg] => Ok(arg),
        _ => Err(format!("expected 1 argument, got {}", args.len())),
    }
}

fn number<T: std::str::FromStr>(args: &[&str]) -> Result<T, String> {
    let arg = single(args)?;
    arg.parse()
        .map_err(|_| format!("invalid number {:?}", arg))
}

fn color(arg: &str) -> Result<Rgb, String> {
    arg.parse().map_err(|e| format!("invalid color {:?}: {}", arg, e))
}

/// Executes scripts against one engine session and one palette.
pub struct ScriptRunner {
    engine: Engine,
    palette: Palette,
}

impl ScriptRunner {
    pub fn new(engine: Engine, palette: Palette) -> Self {
        Self { engine, palette }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Run every line of `script`, writing each command's report line to
    /// `out` as soon as it has run.
    ///
    /// An unknown command stops the run; everything reported before it has
    /// already been written.
    pub fn run<W: Write>(&mut self, script: &str, out: &mut W) -> Result<(), StitchError> {
        for line in script.lines() {
            self.run_line(line, out)?;
        }
        Ok(())
    }

    /// Like [`run`](Self::run), reading lines from `reader`.
    pub fn run_reader<R: BufRead, W: Write>(
        &mut self,
        reader: R,
        out: &mut W,
    ) -> Result<(), StitchError> {
        for line in reader.lines() {
            self.run_line(&line?, out)?;
        }
        Ok(())
    }

    fn run_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<(), StitchError> {
        let Some((name, step)) = parse_line(line)? else {
            return Ok(());
        };

        let outcome = step.and_then(|step| self.execute(&step).map_err(|e| e.to_string()));
        match outcome {
            Ok(()) => {
                tracing::debug!(command = name, "Command succeeded");
                writeln!(out, "{} successful", name)?;
            }
            Err(reason) => {
                tracing::warn!(command = name, %reason, "Command failed");
                writeln!(out, "{} failed\n{}", name, reason)?;
            }
        }
        out.flush()?;
        Ok(())
    }

    /// Execute one parsed step.
    pub fn execute(&mut self, step: &Step) -> Result<(), StitchError> {
        match step {
            Step::Load(path) => {
                let image = read_png(path)?;
                self.engine.load(image);
            }
            Step::SaveImage(path) => {
                let image = self.engine.save()?;
                write_png(&image, path)?;
            }
            Step::SavePattern(path) => self.save_pattern(path)?,
            Step::Run(command) => command.execute(&mut self.engine, &self.palette)?,
        }
        Ok(())
    }

    /// Write the stored pattern, generating one against the session palette
    /// when none exists yet.
    fn save_pattern(&mut self, path: &Path) -> Result<(), StitchError> {
        if self.engine.pattern().is_none() {
            self.engine.generate_pattern(&self.palette)?;
        }
        let text = self.engine.serialize_pattern()?;
        std::fs::write(path, text)?;
        tracing::info!(path = %path.display(), "Saved pattern");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use stitch_engine::{Floss, Image};

    fn palette() -> Palette {
        Palette::new([
            Floss::new(1, Rgb::new(255, 0, 0), 'A'),
            Floss::new(2, Rgb::new(0, 255, 0), 'B'),
        ])
        .unwrap()
    }

    fn run_script(runner: &mut ScriptRunner, script: &str) -> String {
        let mut out = Vec::new();
        runner.run(script, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn runner_with(image: Image) -> ScriptRunner {
        let mut engine = Engine::with_seed(1);
        engine.load(image);
        ScriptRunner::new(engine, palette())
    }

    #[test]
    fn test_parse_skips_blank_and_comments() {
        assert!(parse_line("").unwrap().is_none());
        assert!(parse_line("   ").unwrap().is_none());
        assert!(parse_line("# blur").unwrap().is_none());
    }

    #[test]
    fn test_parse_commands() {
        let (name, step) = parse_line("mosaic 40").unwrap().unwrap();
        assert_eq!(name, "mosaic");
        assert_eq!(step, Ok(Step::Run(Command::Mosaic(40))));

        let (_, step) = parse_line("swap 255,0,0 0,0,255").unwrap().unwrap();
        assert_eq!(
            step,
            Ok(Step::Run(Command::Swap {
                old: Rgb::new(255, 0, 0),
                new: Rgb::new(0, 0, 255),
            }))
        );

        let (_, step) = parse_line("custom AB").unwrap().unwrap();
        assert_eq!(step, Ok(Step::Run(Command::Custom(vec!['A', 'B']))));
    }

    #[test]
    fn test_parse_save_by_extension() {
        let (_, step) = parse_line("save out.png").unwrap().unwrap();
        assert_eq!(step, Ok(Step::SaveImage(PathBuf::from("out.png"))));

        let (_, step) = parse_line("save out.TXT").unwrap().unwrap();
        assert_eq!(step, Ok(Step::SavePattern(PathBuf::from("out.TXT"))));
    }

    #[test]
    fn test_parse_bad_arguments() {
        let (name, step) = parse_line("pixelate many").unwrap().unwrap();
        assert_eq!(name, "pixelate");
        assert_eq!(step, Err("invalid number \"many\"".to_string()));

        let (_, step) = parse_line("blur 3").unwrap().unwrap();
        assert_eq!(step, Err("unexpected arguments: 3".to_string()));

        let (_, step) = parse_line("remove 1,2").unwrap().unwrap();
        assert!(step.is_err());
    }

    #[test]
    fn test_parse_unknown_command() {
        assert!(matches!(
            parse_line("frobnicate 3"),
            Err(StitchError::UnknownCommand(name)) if name == "frobnicate"
        ));
    }

    #[test]
    fn test_run_reports_each_command() {
        let mut runner = runner_with(Image::filled(2, 2, Rgb::new(200, 10, 10)).unwrap());
        let report = run_script(&mut runner, "blur\n\n# tone\ngreyscale\nmosaic 0\npattern\n");

        assert_eq!(
            report,
            "blur successful\n\
             greyscale successful\n\
             mosaic failed\n\
             invalid argument: number of seeds must be between 1 and 4, got 0\n\
             pattern successful\n"
        );
    }

    #[test]
    fn test_run_before_load_fails_but_continues() {
        let mut runner = ScriptRunner::new(Engine::with_seed(0), palette());
        let report = run_script(&mut runner, "sepia\nreload\n");
        assert_eq!(
            report,
            "sepia failed\nimage not loaded yet\nreload failed\nimage not loaded yet\n"
        );
    }

    #[test]
    fn test_run_unknown_command_aborts() {
        let mut runner = runner_with(Image::filled(1, 1, Rgb::BLACK).unwrap());
        let mut out = Vec::new();
        let result = runner.run("blur\nexplode\nsharpen\n", &mut out);
        assert!(matches!(result, Err(StitchError::UnknownCommand(_))));
        assert_eq!(String::from_utf8(out).unwrap(), "blur successful\n");
    }

    #[test]
    fn test_save_pattern_generates_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pattern.txt");
        let mut runner = runner_with(Image::filled(1, 1, Rgb::new(250, 5, 5)).unwrap());

        runner.execute(&Step::SavePattern(path.clone())).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "1x1\nA\n\nLEGEND:\nA DMC-1\n");
    }

    #[test]
    fn test_run_reader() {
        let mut runner = runner_with(Image::filled(1, 1, Rgb::WHITE).unwrap());
        let mut out = Vec::new();
        runner.run_reader("sharpen\n".as_bytes(), &mut out).unwrap();
        assert_eq!(out, b"sharpen successful\n");
    }
}
