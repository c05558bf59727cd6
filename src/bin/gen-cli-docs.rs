use clap_markdown::help_markdown;
use prp_runner::cli::Cli;

fn main() {
    // Print header
    println!("# prp-runner CLI Reference");
    println!();
    println!("This page contains the auto-generated reference documentation for the `prp-runner` command-line interface.");
    println!();

    // Generate and print the markdown using the type parameter
    println!("{}", help_markdown::<Cli>());
}
