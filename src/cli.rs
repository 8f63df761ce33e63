use std::env;

#[derive(Clone, Copy)]
pub struct CliOptions {
    pub sample: bool,
}

pub fn parse_cli_options() -> Result<CliOptions, String> {
    let mut sample = false;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--sample" => {
                sample = true;
            }
            "--help" => {
                println!("Usage: moncal [--sample]");
                println!();
                println!("  --sample   Seed the calendar with a few example events");
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown argument: {}", arg)),
        }
    }

    Ok(CliOptions { sample })
}
