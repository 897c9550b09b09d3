use clap::Parser;
use servicearea::app::{AppError, ServiceAreaApp};

fn main() -> Result<(), AppError> {
    env_logger::init();
    log::debug!("cwd: {:?}", std::env::current_dir());
    let args = ServiceAreaApp::parse();
    args.op.run()
}
