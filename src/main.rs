use noto::ui::output;

fn main() {
    if let Err(err) = noto::cli::run() {
        output::error(format!("{:#}", err));
        std::process::exit(1);
    }
}
