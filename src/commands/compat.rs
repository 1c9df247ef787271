//! Compat command implementation

use console::Style;

use crate::cli::CompatArgs;
use crate::error::Result;
use crate::version::is_compatible_version;

pub fn run(args: CompatArgs) -> Result<()> {
    let compatible = is_compatible_version(&args.available, &args.expected)?;

    if compatible {
        println!(
            "{} version {} satisfies {}",
            Style::new().green().bold().apply_to("compatible"),
            args.available,
            args.expected
        );
        Ok(())
    } else {
        println!(
            "{} version {} does not satisfy {}",
            Style::new().red().bold().apply_to("incompatible"),
            args.available,
            args.expected
        );
        std::process::exit(1);
    }
}
