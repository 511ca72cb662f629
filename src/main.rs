use std::{
    env,
    fs::read_to_string,
    io::{self, BufRead, Write},
    path::PathBuf,
    process,
    time::Instant,
};

use frontend::{parse, render_diagnostic};

const PROMPT: &str = ">> ";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    match args.get(1) {
        Some(file_path) => run_file(PathBuf::from(file_path)),
        None => {
            println!("Parses each line and prints its canonical form.");
            run_repl()?;
            Ok(())
        }
    }
}

fn run_file(file_path: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let file_name = file_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_path.to_string_lossy().into_owned());

    let source = match read_to_string(&file_path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Error: could not read '{}': {}", file_path.display(), error);
            process::exit(1);
        }
    };

    let start = Instant::now();
    let (program, errors) = parse(&source, Some(file_name));
    println!("Parsed in {:?}", start.elapsed());

    if !errors.is_empty() {
        for error in &errors {
            eprint!("{}", render_diagnostic(error, &source));
        }
        process::exit(1);
    }

    println!("{}", program);
    Ok(())
}

fn run_repl() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        write!(stdout, "{}", PROMPT)?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }

        let (program, errors) = parse(&line, None);
        if errors.is_empty() {
            writeln!(stdout, "{}", program)?;
        } else {
            for error in &errors {
                write!(stdout, "{}", render_diagnostic(error, &line))?;
            }
        }
    }
}
