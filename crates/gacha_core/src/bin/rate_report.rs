// Monte Carlo rate sanity report
// Run with: cargo run --bin rate_report --release
//
// Rolls a large batch on a sample banner and prints observed rarity
// frequencies plus the soft-pity rate curve, for eyeballing against the
// configured 2/8/50/40 table.

use gacha_core::{
    gacha_roll_json, load_gacha_data_json, six_star_rate, GachaConfig, Rarity, RollResponse,
};

const BATCHES: usize = 1000;
const BATCH_SIZE: usize = 100;

fn sample_data_json() -> String {
    let mut operators = Vec::new();
    for i in 1..=5 {
        operators.push(format!(
            r#"{{"id": "six_{:02}", "name": "6-{}", "rarity": "Six"}}"#,
            i, i
        ));
    }
    for i in 1..=10 {
        operators.push(format!(
            r#"{{"id": "five_{:02}", "name": "5-{}", "rarity": "Five"}}"#,
            i, i
        ));
    }
    for i in 1..=20 {
        operators.push(format!(
            r#"{{"id": "four_{:02}", "name": "4-{}", "rarity": "Four"}}"#,
            i, i
        ));
    }
    for i in 1..=20 {
        operators.push(format!(
            r#"{{"id": "three_{:02}", "name": "3-{}", "rarity": "Three"}}"#,
            i, i
        ));
    }

    format!(
        r#"{{
            "banners": [
                {{"id": "standard", "name": "Standard Headhunting",
                  "featured": {{"six": ["six_01"], "five": ["five_01", "five_02"]}}}}
            ],
            "catalog": {{"operators": [{}]}}
        }}"#,
        operators.join(",")
    )
}

fn main() {
    let load = load_gacha_data_json(&sample_data_json());
    println!("load: {}", load);

    let mut counts = [0usize; 7]; // index by rarity value
    let mut featured_sixes = 0usize;
    let mut total = 0usize;

    for batch in 0..BATCHES {
        let request = format!(
            r#"{{"banner_id": "standard", "count": {}, "seed": {}}}"#,
            BATCH_SIZE, 0xC0FFEE + batch as u64
        );
        let response: RollResponse =
            serde_json::from_str(&gacha_roll_json(&request)).expect("response parse");
        assert!(response.success, "roll failed: {:?}", response.error);

        for result in &response.results {
            counts[result.rarity.as_u8() as usize] += 1;
            if result.rarity == Rarity::Six && result.featured {
                featured_sixes += 1;
            }
            total += 1;
        }
    }

    println!("\n=== Observed rarity frequencies ({} pulls) ===", total);
    for value in (3..=6u8).rev() {
        let rarity = Rarity::from_u8(value).unwrap();
        let count = counts[value as usize];
        println!(
            "{:8} {:7} pulls  {:6.3}%",
            rarity.stars(),
            count,
            100.0 * count as f64 / total as f64
        );
    }
    if counts[6] > 0 {
        println!(
            "\n6★ featured share: {:.1}% (expected ~50%)",
            100.0 * featured_sixes as f64 / counts[6] as f64
        );
    }

    println!("\n=== Soft-pity 6★ rate curve ===");
    let config = GachaConfig::default();
    for pity in [0, 25, 49, 50, 55, 60, 70, 80, 90, 98, 99] {
        println!("pity {:3} -> {:6.2}%", pity, six_star_rate(2.0, &config, pity));
    }
}
