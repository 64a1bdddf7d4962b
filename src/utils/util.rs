use super::MotifError;

pub type Result<T> = std::result::Result<T, MotifError>;

pub fn handle_error_and_exit(err: MotifError) -> ! {
    log::error!("{}", err);
    std::process::exit(1);
}
