use std::io::Write;

use crate::error::Result;
use crate::output;

pub fn run<W: Write>(out: &mut W) -> Result<()> {
    output::render_versions(out)
}
