use std::io::{self, Write};

use bcvec_codec::RenderStyle;
use bcvec_gen::{Error, PYCA_VECTORS, render_table};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "bcvec-gen")]
#[command(about = "Render the pyca bcrypt reference vectors as byte-string literal tuples")]
struct Args {
    /// Render printable salt and hash bytes as bare characters instead of
    /// full hex escapes
    #[arg(long)]
    readable: bool,
}

fn main() -> Result<(), Error> {
    let args = Args::parse();

    let style = if args.readable { RenderStyle::Printable } else { RenderStyle::Hex };

    // The table is fully rendered before the first byte reaches stdout, so a
    // bad fixture exits non-zero with no output to discard.
    let table = render_table(PYCA_VECTORS, style)?;
    io::stdout().write_all(table.as_bytes())?;

    Ok(())
}
