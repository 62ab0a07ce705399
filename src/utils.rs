use rand::distr::Alphanumeric;
use rand::Rng;

const WORDS: &[&str] = &[
    "morning", "drive", "chill", "focus", "summer", "night", "workout", "rainy", "road", "trip",
    "vinyl", "classics", "indie", "acoustic", "late", "sunday", "groove", "mellow",
];

pub fn generate_name() -> String {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(10)
        .map(char::from)
        .collect();
    format!("Playlist {}", suffix)
}

pub fn generate_description() -> String {
    let mut rng = rand::rng();
    let len = rng.random_range(4..=8);
    let words: Vec<&str> = (0..len)
        .map(|_| WORDS[rng.random_range(0..WORDS.len())])
        .collect();
    format!("Description {}", words.join(" "))
}
