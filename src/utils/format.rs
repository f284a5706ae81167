// src/utils/format.rs

// Mask a secret for log output; never log the real value
pub fn mask_secret(secret: &str) -> String {
    let count = secret.chars().count();
    if count <= 2 {
        return "***".to_string();
    }
    let first = secret.chars().next().unwrap();
    let last = secret.chars().last().unwrap();
    format!("{}***{} ({} chars)", first, last, count)
}

// Render a zxcvbn score (0-4) as a small meter
pub fn score_meter(score: u8) -> String {
    let filled = score.min(4) as usize;
    let mut meter = String::new();
    for slot in 0..4 {
        meter.push(if slot < filled { '●' } else { '○' });
    }
    format!("{} ({}/4)", meter, filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_keeps_only_the_edges() {
        assert_eq!(mask_secret("hunter2"), "h***2 (7 chars)");
        assert_eq!(mask_secret("ab"), "***");
        assert_eq!(mask_secret(""), "***");
    }

    #[test]
    fn meter_fills_up_to_the_score() {
        assert_eq!(score_meter(0), "○○○○ (0/4)");
        assert_eq!(score_meter(3), "●●●○ (3/4)");
        assert_eq!(score_meter(9), "●●●● (4/4)");
    }
}
