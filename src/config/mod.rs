use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "hello-greeter")]
#[command(version, about = "Prints a greeting to standard output")]
pub struct CliConfig {
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
