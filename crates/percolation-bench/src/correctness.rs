//! Post-operation invariant checkers for correctness validation.

use std::collections::VecDeque;

use percolation_core::{ConnectivityGrid, PercolationError, Site, SiteIndexer};

fn describe(err: &PercolationError) -> String {
    format!("grid query failed: {err}")
}

fn all_sites(n: usize) -> impl Iterator<Item = Site> {
    (1..=n).flat_map(move |row| (1..=n).map(move |col| Site::new(row, col)))
}

/// Verifies that every full site is also open.
pub fn check_full_implies_open(grid: &ConnectivityGrid) -> Result<(), String> {
    for site in all_sites(grid.size()) {
        let full = grid.is_full(site.row, site.col).map_err(|e| describe(&e))?;
        let open = grid.is_open(site.row, site.col).map_err(|e| describe(&e))?;
        if full && !open {
            return Err(format!("site {site} is full but blocked"));
        }
    }
    Ok(())
}

/// Verifies that a percolating grid has at least one full site on row `n`.
pub fn check_percolation_has_full_bottom(grid: &ConnectivityGrid) -> Result<(), String> {
    if !grid.percolates() {
        return Ok(());
    }
    let n = grid.size();
    for col in 1..=n {
        if grid.is_full(n, col).map_err(|e| describe(&e))? {
            return Ok(());
        }
    }
    Err(format!("grid percolates but no site on row {n} is full"))
}

/// Verifies that the open-site counter matches the open-site table.
pub fn check_open_count(grid: &ConnectivityGrid) -> Result<(), String> {
    let counted = grid.open_sites().count();
    if counted != grid.number_of_open_sites() {
        return Err(format!(
            "open count mismatch: counter={}, table={counted}",
            grid.number_of_open_sites()
        ));
    }
    Ok(())
}

/// Verifies union-find answers against a breadth-first flood fill from the
/// open sites on row 1:
/// - a site is full iff the flood fill reaches it
/// - the grid percolates iff the flood fill reaches row `n`
pub fn check_against_flood_fill(grid: &ConnectivityGrid) -> Result<(), String> {
    let indexer = SiteIndexer::new(grid.size()).map_err(|e| describe(&e))?;
    let mut reached = vec![false; indexer.site_count()];
    let mut queue: VecDeque<Site> = VecDeque::new();

    for site in grid.open_sites().filter(|&site| indexer.is_top(site)) {
        reached[indexer.cell(site)] = true;
        queue.push_back(site);
    }
    while let Some(site) = queue.pop_front() {
        for neighbor in indexer.neighbors(site) {
            let cell = indexer.cell(neighbor);
            if reached[cell] {
                continue;
            }
            if grid
                .is_open(neighbor.row, neighbor.col)
                .map_err(|e| describe(&e))?
            {
                reached[cell] = true;
                queue.push_back(neighbor);
            }
        }
    }

    for site in all_sites(grid.size()) {
        let full = grid.is_full(site.row, site.col).map_err(|e| describe(&e))?;
        let expected = reached[indexer.cell(site)];
        if full != expected {
            return Err(format!(
                "fullness mismatch at {site}: union-find={full}, flood fill={expected}"
            ));
        }
    }

    let touches_bottom = all_sites(grid.size())
        .filter(|&site| indexer.is_bottom(site))
        .any(|site| reached[indexer.cell(site)]);
    if grid.percolates() != touches_bottom {
        return Err(format!(
            "percolation mismatch: union-find={}, flood fill={touches_bottom}",
            grid.percolates()
        ));
    }
    Ok(())
}

/// Runs every checker in this module.
pub fn check_all(grid: &ConnectivityGrid) -> Result<(), String> {
    check_open_count(grid)?;
    check_full_implies_open(grid)?;
    check_percolation_has_full_bottom(grid)?;
    check_against_flood_fill(grid)
}
