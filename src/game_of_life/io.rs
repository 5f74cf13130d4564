//! File I/O for seed coordinates

use super::Pattern;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Load seed coordinates from a file.
///
/// `.json` files hold an array of `[x, y]` pairs. Anything else is read as a
/// text grid: one line per x, with '1' for alive cells and '0' for dead cells.
pub fn load_seed_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<(isize, isize)>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file: {}", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let parsed: Result<Vec<(isize, isize)>> = if is_json {
        serde_json::from_str(&content).map_err(anyhow::Error::from)
    } else {
        parse_seed_from_string(&content)
    };
    parsed.with_context(|| format!("Failed to parse seed file: {}", path.display()))
}

/// Parse live-cell coordinates from a text grid
pub fn parse_seed_from_string(content: &str) -> Result<Vec<(isize, isize)>> {
    let lines: Vec<&str> = content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        anyhow::bail!("Seed file is empty or contains no valid rows");
    }

    let width = lines[0].len();
    let mut coords = Vec::new();

    for (x, line) in lines.iter().enumerate() {
        if line.len() != width {
            anyhow::bail!(
                "Row {} has length {}, expected {} (all rows must have the same length)",
                x,
                line.len(),
                width
            );
        }

        for (y, ch) in line.chars().enumerate() {
            match ch {
                '0' => {}
                '1' => coords.push((x as isize, y as isize)),
                _ => anyhow::bail!(
                    "Invalid character '{}' at position ({}, {}). Only '0' and '1' are allowed",
                    ch,
                    x,
                    y
                ),
            }
        }
    }

    Ok(coords)
}

/// Render seed coordinates as a `size`×`size` text grid.
///
/// Coordinates outside the grid are left out.
pub fn seed_to_string(coords: &[(isize, isize)], size: usize) -> String {
    let mut cells = vec![false; size * size];
    for &(x, y) in coords {
        if (0..size as isize).contains(&x) && (0..size as isize).contains(&y) {
            cells[x as usize * size + y as usize] = true;
        }
    }

    let mut result = String::with_capacity(size * (size + 1));
    for row in cells.chunks(size.max(1)) {
        for &cell in row {
            result.push(if cell { '1' } else { '0' });
        }
        result.push('\n');
    }
    result
}

/// Save seed coordinates to a text grid file
pub fn save_seed_to_file<P: AsRef<Path>>(
    coords: &[(isize, isize)],
    size: usize,
    path: P,
) -> Result<()> {
    let path = path.as_ref();
    let content = seed_to_string(coords, size);

    // Create parent directories if they don't exist
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write seed to file: {}", path.display()))?;

    Ok(())
}

/// Write one text-grid seed file per built-in pattern.
///
/// Existing files are left alone unless `overwrite` is set. Returns the paths
/// actually written.
pub fn create_example_seeds<P: AsRef<Path>>(
    output_dir: P,
    size: usize,
    overwrite: bool,
) -> Result<Vec<PathBuf>> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let mut written = Vec::new();
    for pattern in Pattern::ALL {
        let path = dir.join(format!("{}.txt", pattern.name()));
        if path.exists() && !overwrite {
            continue;
        }
        save_seed_to_file(pattern.coordinates(), size, &path)?;
        written.push(path);
    }

    Ok(written)
}
