use boss_fight::{build_info, init_logging, start_game};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("boss_fight {}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Boss Fight - ten heroes against one boss\n");
                println!("Usage: boss_fight\n");
                println!("Runs one battle to the end and narrates every round.");
                println!("Set RUST_LOG=debug for engine diagnostics on stderr.\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'boss_fight --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    init_logging();

    let mut rng = rand::thread_rng();
    if let Err(e) = start_game(&mut rng, |line| println!("{}", line)) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
