//! Implementation of the `tplfs list` command.

use serde::Serialize;
use tracing::instrument;

use tplfs_core::application::TemplateSourceProvider;
use tplfs_core::domain::PathPrefix;

use crate::{
    cli::{ListArgs, ListFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// One template visible through the configured prefix.
#[derive(Debug, Serialize, PartialEq)]
struct Listed {
    name: String,
    cache_key: String,
}

#[instrument(skip_all)]
pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let files = super::filesystem(&config).list_files()?;
    let loader = super::build_loader(&config);
    let names = names_below(loader.prefix(), &files);

    let format = if output.is_json() {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header(&format!("Templates in {}:", describe_root(&config)))?;
            if names.is_empty() {
                output.info("No templates found")?;
            }
            for name in &names {
                let key = loader.get_cache_key(name)?;
                output.data(&format!("  {name:<40} {key}"))?;
            }
        }
        ListFormat::List => {
            for name in &names {
                output.data(name)?;
            }
        }
        ListFormat::Json => {
            let listed = names
                .iter()
                .map(|name| {
                    loader.get_cache_key(name).map(|cache_key| Listed {
                        name: name.clone(),
                        cache_key,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            output.json(&listed)?;
        }
    }

    Ok(())
}

/// Paths below `prefix` with the prefix removed, in input order.
fn names_below(prefix: &PathPrefix, files: &[String]) -> Vec<String> {
    files
        .iter()
        .filter_map(|path| prefix.strip(path))
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect()
}

fn describe_root(config: &AppConfig) -> String {
    let root = config.loader.root.display();
    if config.loader.prefix.is_empty() {
        root.to_string()
    } else {
        format!("{root} (prefix '{}')", config.loader.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files(paths: &[&str]) -> Vec<String> {
        paths.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn empty_prefix_lists_everything() {
        let all = files(&["a.twig", "templates/b.twig"]);
        assert_eq!(names_below(&PathPrefix::default(), &all), all);
    }

    #[test]
    fn prefix_is_stripped_and_others_dropped() {
        let all = files(&["a.twig", "templates/b.twig", "templates/test/Object.twig"]);
        assert_eq!(
            names_below(&PathPrefix::new("templates"), &all),
            files(&["b.twig", "test/Object.twig"])
        );
    }

    #[test]
    fn sibling_with_shared_stem_is_not_below_prefix() {
        let all = files(&["templates-old/a.twig"]);
        assert!(names_below(&PathPrefix::new("templates"), &all).is_empty());
    }

    #[test]
    fn root_description_mentions_prefix() {
        let mut config = AppConfig::default();
        assert_eq!(describe_root(&config), ".");
        config.loader.prefix = "views".into();
        assert_eq!(describe_root(&config), ". (prefix 'views')");
    }
}
