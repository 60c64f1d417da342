//! Tests for utility resolution.

use super::*;
use crate::test_support::CountingSearch;
use std::sync::Arc;

#[test]
fn test_empty_name_is_rejected() {
    let search = Arc::new(CountingSearch::default());
    let resolver = UtilityResolver::with_search(search.clone());

    assert_eq!(resolver.utility(""), Err(UtilityNotFoundError::EmptyName));
    assert_eq!(resolver.utility("   "), Err(UtilityNotFoundError::EmptyName));
    assert_eq!(resolver.utility("\t\n"), Err(UtilityNotFoundError::EmptyName));
    assert_eq!(search.calls(), 0);
}

#[test]
fn test_second_lookup_is_served_from_cache() {
    let search = Arc::new(CountingSearch::with(&[("tar", "/usr/bin/tar")]));
    let resolver = UtilityResolver::with_search(search.clone());

    let first = resolver.utility("tar").unwrap();
    let second = resolver.utility("tar").unwrap();

    assert_eq!(first, "/usr/bin/tar");
    assert_eq!(first, second);
    assert_eq!(search.calls(), 1);
}

#[test]
fn test_name_is_trimmed_before_lookup_and_caching() {
    let search = Arc::new(CountingSearch::with(&[("gzip", "/bin/gzip")]));
    let resolver = UtilityResolver::with_search(search.clone());

    assert_eq!(resolver.utility("  gzip\n").unwrap(), "/bin/gzip");
    assert_eq!(resolver.utility("gzip").unwrap(), "/bin/gzip");
    assert_eq!(resolver.cached(" gzip "), Some("/bin/gzip".to_string()));
    assert_eq!(search.calls(), 1);
}

#[test]
fn test_trailing_whitespace_is_trimmed_from_result() {
    let search = CountingSearch::with(&[("pg_dump", "/usr/bin/pg_dump\n")]);
    let resolver = UtilityResolver::with_search(search);

    assert_eq!(resolver.utility("pg_dump").unwrap(), "/usr/bin/pg_dump");
}

#[test]
fn test_unknown_utility_is_not_found() {
    let search = Arc::new(CountingSearch::default());
    let resolver = UtilityResolver::with_search(search.clone());

    let err = resolver.utility("definitely-not-a-real-binary-xyz").unwrap_err();
    assert_eq!(
        err,
        UtilityNotFoundError::NotFound {
            name: "definitely-not-a-real-binary-xyz".to_string()
        }
    );
    assert!(err.to_string().contains("$PATH"));
}

#[test]
fn test_failures_are_not_cached() {
    let search = Arc::new(CountingSearch::default());
    let resolver = UtilityResolver::with_search(search.clone());

    assert!(resolver.utility("gpg").is_err());
    assert!(resolver.utility("gpg").is_err());
    assert_eq!(resolver.cached("gpg"), None);
    assert_eq!(search.calls(), 2);
}

#[test]
fn test_blank_search_result_is_not_found() {
    let search = CountingSearch::with(&[("ghost", "  \n")]);
    let resolver = UtilityResolver::with_search(search);

    assert!(matches!(
        resolver.utility("ghost"),
        Err(UtilityNotFoundError::NotFound { .. })
    ));
    assert_eq!(resolver.cached("ghost"), None);
}

#[test]
fn test_preloaded_paths_win_over_search() {
    let search = Arc::new(CountingSearch::with(&[("tar", "/usr/bin/tar")]));
    let resolver = UtilityResolver::with_search(search.clone())
        .preload([("tar", "/opt/gnu/bin/gtar"), ("  ", "/ignored")]);

    assert_eq!(resolver.utility("tar").unwrap(), "/opt/gnu/bin/gtar");
    assert_eq!(resolver.cached(""), None);
    assert_eq!(search.calls(), 0);
}

#[test]
fn test_preload_does_not_overwrite_existing_entry() {
    let search = CountingSearch::with(&[("tar", "/usr/bin/tar")]);
    let resolver = UtilityResolver::with_search(search)
        .preload([("tar", "/first")])
        .preload([("tar", "/second")]);

    assert_eq!(resolver.utility("tar").unwrap(), "/first");
}

#[test]
fn test_utilities_resolves_in_order() {
    let search = CountingSearch::with(&[("tar", "/bin/tar"), ("gzip", "/bin/gzip")]);
    let resolver = UtilityResolver::with_search(search);

    let resolved = resolver.utilities(["tar", " gzip"]).unwrap();
    assert_eq!(
        resolved,
        vec![
            ("tar".to_string(), "/bin/tar".to_string()),
            ("gzip".to_string(), "/bin/gzip".to_string()),
        ]
    );
}

#[test]
fn test_utilities_stops_at_first_failure() {
    let search = Arc::new(CountingSearch::with(&[("tar", "/bin/tar")]));
    let resolver = UtilityResolver::with_search(search.clone());

    let err = resolver.utilities(["missing", "tar"]).unwrap_err();
    assert_eq!(
        err,
        UtilityNotFoundError::NotFound {
            name: "missing".to_string()
        }
    );
    assert_eq!(search.calls(), 1);
}

#[test]
fn test_concurrent_callers_see_one_value() {
    let search = Arc::new(CountingSearch::with(&[("rsync", "/usr/bin/rsync")]));
    let resolver = UtilityResolver::with_search(search.clone());

    let results: Vec<String> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| resolver.utility("rsync").unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(results.iter().all(|path| path == "/usr/bin/rsync"));
    assert!(search.calls() >= 1);
    assert_eq!(resolver.cached("rsync"), Some("/usr/bin/rsync".to_string()));
}

#[cfg(unix)]
mod system_path {
    use crate::error::UtilityNotFoundError;
    use crate::resolver::{PathSearch, SystemPath, UtilityResolver};
    use crate::test_support::write_executable;
    use tempfile::TempDir;

    #[test]
    fn test_finds_executable_in_given_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let expected = write_executable(temp_dir.path(), "backup-helper-xyz");

        let resolver = UtilityResolver::with_search(SystemPath::with_dirs([temp_dir.path()]));
        let path = resolver.utility("backup-helper-xyz").unwrap();

        assert_eq!(path, expected.to_string_lossy());
    }

    #[test]
    fn test_first_directory_wins() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        let expected = write_executable(first.path(), "dup-tool-xyz");
        write_executable(second.path(), "dup-tool-xyz");

        let search = SystemPath::with_dirs([first.path(), second.path()]);
        assert_eq!(
            search.find("dup-tool-xyz"),
            Some(expected.to_string_lossy().into_owned())
        );
    }

    #[test]
    fn test_non_executable_file_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("plain-file-xyz"), "data").unwrap();

        let resolver = UtilityResolver::with_search(SystemPath::with_dirs([temp_dir.path()]));
        assert!(matches!(
            resolver.utility("plain-file-xyz"),
            Err(UtilityNotFoundError::NotFound { .. })
        ));
    }

    #[test]
    fn test_cached_path_survives_removal() {
        let temp_dir = TempDir::new().unwrap();
        let tool = write_executable(temp_dir.path(), "vanishing-xyz");
        let resolver = UtilityResolver::with_search(SystemPath::with_dirs([temp_dir.path()]));

        let first = resolver.utility("vanishing-xyz").unwrap();
        std::fs::remove_file(&tool).unwrap();

        assert_eq!(resolver.utility("vanishing-xyz").unwrap(), first);
    }

    #[test]
    fn test_absolute_path_is_checked_directly() {
        let temp_dir = TempDir::new().unwrap();
        let tool = write_executable(temp_dir.path(), "direct-xyz");
        let tool = tool.to_string_lossy().into_owned();

        let search = SystemPath::with_dirs(Vec::<std::path::PathBuf>::new());
        assert_eq!(search.find(&tool), Some(tool.clone()));
    }

    #[test]
    fn test_process_path_finds_sh() {
        let resolver = UtilityResolver::new();
        let sh = resolver.utility("sh").unwrap();
        assert!(std::path::Path::new(&sh).is_absolute());
        assert!(sh.ends_with("/sh"));
    }

    #[test]
    fn test_process_path_missing_binary() {
        let resolver = UtilityResolver::new();
        assert!(matches!(
            resolver.utility("definitely-not-a-real-binary-xyz"),
            Err(UtilityNotFoundError::NotFound { .. })
        ));
    }
}
