use anyhow::{Context, Result};

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// Parse CLI seed tokens. Negative integers fold to their magnitude.
pub fn parse_seeds(tokens: &[String]) -> Result<Vec<u64>> {
    let mut seeds = Vec::with_capacity(tokens.len());
    for token in tokens {
        let seed = if let Ok(value) = token.parse::<u64>() {
            value
        } else {
            token
                .parse::<i64>()
                .map(i64::unsigned_abs)
                .with_context(|| format!("invalid seed {token:?}"))?
        };
        if !seeds.contains(&seed) {
            seeds.push(seed);
        }
    }
    anyhow::ensure!(!seeds.is_empty(), "at least one seed is required");
    Ok(seeds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_csv_trims_and_drops_blanks() {
        assert_eq!(split_csv(" a, b,,c "), vec!["a", "b", "c"]);
        assert!(split_csv("").is_empty());
    }

    #[test]
    fn seeds_parse_dedupe_and_fold_negatives() {
        let tokens = split_csv("7,-7,42,7");
        assert_eq!(parse_seeds(&tokens).unwrap(), vec![7, 42]);
    }

    #[test]
    fn seeds_reject_garbage_and_empty_lists() {
        assert!(parse_seeds(&split_csv("abc")).is_err());
        assert!(parse_seeds(&[]).is_err());
    }
}
