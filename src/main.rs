use clap::{Arg, Command};
use std::io::Read;
use std::path::Path;
use transkribo::{Transcriber, loader};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("transkribo")
        .version("0.1.0")
        .about("Phonetic transcription between orthographies, driven by a JSON rule set")
        .arg(
            Arg::new("text")
                .help("Text to transcribe (reads standard input when omitted)")
                .index(1),
        )
        .arg(
            Arg::new("rules")
                .long("rules")
                .short('r')
                .help("Path to a JSON rule file replacing the default Esperanto-Polish rules"),
        )
        .get_matches();

    let transcriber = match matches.get_one::<String>("rules") {
        Some(path) => Transcriber::with_rules(loader::load_rules_from_file(Path::new(path))?),
        None => Transcriber::new(),
    };

    let text = match matches.get_one::<String>("text") {
        Some(text) => text.clone(),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    println!("{}", transcriber.transcribe(&text));

    Ok(())
}
