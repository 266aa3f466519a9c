use crate::vacuum::{Grid, VacuumError};

/// Sample levels shipped with the binary, keyed by name.
const BUNDLED: [(&str, &str); 6] = [
    ("level 0", include_str!("../levels/0.level")),
    ("level 1", include_str!("../levels/1.level")),
    ("level 2", include_str!("../levels/2.level")),
    ("level 3", include_str!("../levels/3.level")),
    ("level 4", include_str!("../levels/4.level")),
    ("level 5", include_str!("../levels/5.level")),
];

pub fn bundled() -> Result<Vec<(String, Grid)>, VacuumError> {
    BUNDLED
        .iter()
        .map(|(name, level)| {
            let grid: Grid = level.parse()?;
            Ok::<_, VacuumError>((name.to_string(), grid))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::vacuum::clean;

    use super::bundled;

    #[test]
    fn test_bundled_levels() {
        let cleaned: Vec<usize> = bundled()
            .unwrap()
            .iter()
            .map(|(_, grid)| clean(grid).unwrap())
            .collect();
        assert_eq!(cleaned, vec![1, 6, 15, 9, 1, 2]);
    }
}
