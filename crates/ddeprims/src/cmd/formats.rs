use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_formats, OutputFormat};

pub fn run(format: OutputFormat) -> CliResult<i32> {
    print_formats(format);
    Ok(SUCCESS)
}
