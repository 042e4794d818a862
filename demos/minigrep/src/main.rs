// minigrep — a small grep-style driver for the regexrs engine
//
// Usage: minigrep [-E] [-i] [-n] [-v] PATTERN [FILE...]
// Reads stdin when no files are given.

use std::env;
use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use regexrs::{CompFlags, Regex};

struct Options {
    flags: CompFlags,
    line_numbers: bool,
    invert: bool,
    pattern: String,
    files: Vec<String>,
}

fn parse_args() -> Result<Options, String> {
    let mut flags = CompFlags::NEWLINE;
    let mut line_numbers = false;
    let mut invert = false;
    let mut rest = Vec::new();

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "-E" => flags |= CompFlags::EXTENDED,
            "-i" => flags |= CompFlags::IGNORE_CASE,
            "-n" => line_numbers = true,
            "-v" => invert = true,
            _ if arg.starts_with('-') && arg.len() > 1 => {
                return Err(format!("unknown option: {arg}"));
            }
            _ => rest.push(arg),
        }
    }

    if rest.is_empty() {
        return Err("usage: minigrep [-E] [-i] [-n] [-v] PATTERN [FILE...]".to_string());
    }

    let pattern = rest.remove(0);
    Ok(Options {
        flags,
        line_numbers,
        invert,
        pattern,
        files: rest,
    })
}

fn grep(re: &Regex, options: &Options, name: Option<&str>, text: &str) -> usize {
    let mut hits = 0;
    for (number, line) in text.lines().enumerate() {
        if re.is_match(line) != options.invert {
            hits += 1;
            match (name, options.line_numbers) {
                (Some(name), true) => println!("{name}:{}:{line}", number + 1),
                (Some(name), false) => println!("{name}:{line}"),
                (None, true) => println!("{}:{line}", number + 1),
                (None, false) => println!("{line}"),
            }
        }
    }
    hits
}

fn main() -> ExitCode {
    let options = match parse_args() {
        Ok(options) => options,
        Err(message) => {
            eprintln!("minigrep: {message}");
            return ExitCode::from(2);
        }
    };

    let re = match Regex::with_flags(&options.pattern, options.flags) {
        Ok(re) => re,
        Err(error) => {
            eprintln!("minigrep: {}: {error}", options.pattern);
            return ExitCode::from(2);
        }
    };

    let mut hits = 0;
    if options.files.is_empty() {
        let mut text = String::new();
        if let Err(error) = io::stdin().read_to_string(&mut text) {
            eprintln!("minigrep: stdin: {error}");
            return ExitCode::from(2);
        }
        hits += grep(&re, &options, None, &text);
    } else {
        let show_names = options.files.len() > 1;
        for file in &options.files {
            match fs::read_to_string(file) {
                Ok(text) => {
                    let name = show_names.then_some(file.as_str());
                    hits += grep(&re, &options, name, &text);
                }
                Err(error) => {
                    eprintln!("minigrep: {file}: {error}");
                    return ExitCode::from(2);
                }
            }
        }
    }

    if hits > 0 { ExitCode::SUCCESS } else { ExitCode::from(1) }
}
