//! Dispatch-tree compiler CLI.

fn main() {
    dtc::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        println!("{}", dtc::commands::USAGE);
        return;
    }

    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();
    let result = dtc::commands::run(&args, &mut stdout);

    if let Err(err) = result {
        tracing::debug!(error = ?err, "dtc failed");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
