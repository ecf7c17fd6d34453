// Built-in repositories shown when neither the API nor the cache has data.

use crate::github::Repository;

fn repo(full_name: &str, description: &str, stars: u64, language: &str) -> Repository {
    Repository {
        full_name: full_name.to_string(),
        description: Some(description.to_string()),
        stars,
        language: Some(language.to_string()),
        html_url: format!("https://github.com/{}", full_name),
        created_at: None,
        fork: false,
        archived: false,
        topics: Vec::new(),
    }
}

/// Fixed, never-empty list of well-known repositories.
pub fn repositories() -> Vec<Repository> {
    vec![
        repo(
            "ollama/ollama",
            "Run Llama 3, Mistral, Gemma locally",
            85_000,
            "Go",
        ),
        repo(
            "comfyanonymous/ComfyUI",
            "Powerful Stable Diffusion GUI",
            47_000,
            "Python",
        ),
        repo(
            "rust-lang/rust",
            "Empowering everyone to build reliable and efficient software.",
            100_000,
            "Rust",
        ),
    ]
}
