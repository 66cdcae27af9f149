use doctree_core::config::{ConfigLoader, default_config_path};
use doctree_core::indexer::DocumentWalker;

use super::GlobalOpts;
use crate::logging;

pub fn run(global: &GlobalOpts) {
    let mut rc = match ConfigLoader::load(global.config, global.profile) {
        Ok(rc) => rc,
        Err(e) => {
            println!("FAIL doctree doctor");
            println!("{e}");
            if global.config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            logging::exit(1);
        }
    };
    if let Some(root) = global.root {
        rc.docs_root = root.to_path_buf();
    }
    logging::init(&rc);

    let walker = match DocumentWalker::with_exclusions(
        &rc.docs_root,
        &rc.glob,
        rc.excluded_folders.clone(),
    ) {
        Ok(walker) => walker,
        Err(e) => {
            println!("FAIL doctree doctor");
            println!("{e}");
            logging::exit(1);
        }
    };
    let walked = walker.walk();
    tracing::debug!("doctor found {} matching files", walked.files.len());

    println!("OK   doctree doctor");
    println!(
        "path: {}",
        rc.config_path.as_ref().map_or_else(
            || format!("{} (not found, using defaults)", default_config_path().display()),
            |p| p.display().to_string()
        )
    );
    println!("profile: {}", rc.active_profile);
    println!("docs_root: {}", rc.docs_root.display());
    println!("glob: {}", rc.glob);
    println!("max_depth: {}", rc.max_depth);
    println!("summary_length: {}", rc.summary_length);
    if !rc.excluded_folders.is_empty() {
        let excluded: Vec<_> =
            rc.excluded_folders.iter().map(|p| p.display().to_string()).collect();
        println!("excluded_folders: {}", excluded.join(", "));
    }
    println!("search.title_boost: {}", rc.search.title_boost);
    println!("search.snippet_length: {}", rc.search.snippet_length);
    println!("glossary: {} entries", rc.glossary.len());
    println!("documents: {}", walked.files.len());
    if walked.unreadable > 0 {
        println!("unreadable entries: {}", walked.unreadable);
    }
}
