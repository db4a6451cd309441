use std::process::ExitCode;

fn main() -> ExitCode {
    argscope::cli::init_tracing();

    let argv: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    argscope::cli::run(&argv)
}
