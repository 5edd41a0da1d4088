
//! Console rendering of random bitmaps and their distance grids:
//! `cargo run --example print_grids -- <count> <width> <height>`.
//! The flat column-major sequence is broken into lines
//! of `height` values each, cell values first, distances second.

use manhattan_distance_field::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut arguments = std::env::args().skip(1);

    let mut next_dimension = |name: &str, default: usize| -> Result<usize, String> {
        match arguments.next() {
            None => Ok(default),
            Some(text) => text.parse()
                .map_err(|_| format!("{} must be a positive integer, got `{}`", name, text)),
        }
    };

    let count = next_dimension("count", 2)?;
    let width = next_dimension("width", 6)?;
    let height = next_dimension("height", 4)?;

    for bitmap in create_bitmaps(count, width, height, ValueSource::Random)? {
        let grid = compute_u32_distance_grid(&bitmap)?;

        println!("Bitmap data:");
        print_lines(bitmap.values().iter().map(|&value| value as u32), height);

        println!("Bitmap distances:");
        print_lines(grid.to_vec().into_iter(), height);
    }

    Ok(())
}

fn print_lines(values: impl Iterator<Item = u32>, per_line: usize) {
    let values: Vec<String> = values.map(|value| value.to_string()).collect();

    for line in values.chunks(per_line) {
        println!("{}", line.join(" "));
    }

    println!();
}
