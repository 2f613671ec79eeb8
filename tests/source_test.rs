use tfdocs::source::compose_source;

#[test]
fn test_explicit_source_is_verbatim() {
    assert_eq!(compose_source("modules", Some("tfdocs"), false, None), "tfdocs");
    assert_eq!(
        compose_source("modules", Some("git@git.com:tfdocs"), false, Some(("ignored", "."))),
        "git@git.com:tfdocs"
    );
}

#[test]
fn test_explicit_source_with_git_suffix() {
    assert_eq!(
        compose_source("modules", Some("git@git.com:tfdocs"), true, Some(("ignored", "."))),
        "git@git.com:tfdocs//.?ref=<TAG>"
    );
    assert_eq!(
        compose_source("modules", Some("git@git.com:tfdocs"), true, Some(("ignored", "envs/prod"))),
        "git@git.com:tfdocs//envs/prod?ref=<TAG>"
    );
}

#[test]
fn test_remote_url_used_when_no_explicit_source() {
    assert_eq!(
        compose_source("vpc", None, false, Some(("git@github.com:org/infra.git", "modules/vpc"))),
        "git@github.com:org/infra.git//modules/vpc?ref=<TAG>"
    );
    assert_eq!(
        compose_source("vpc", None, true, Some(("git@github.com:org/infra.git", "."))),
        "git@github.com:org/infra.git//.?ref=<TAG>"
    );
}

#[test]
fn test_local_path_fallback_without_git_context() {
    assert_eq!(compose_source("vpc", None, false, None), "./modules/vpc");
    assert_eq!(compose_source("vpc", None, true, None), "./modules/vpc");
    assert_eq!(compose_source("vpc", Some("src"), true, None), "./modules/vpc");
}
