use std::fs;
use std::path::{Path, PathBuf};

/// Writes a stand-in `git` whose `clone` lays down a small template tree.
/// URLs containing `missing` fail the way an unknown repository does.
pub fn create_fake_git(dir: &Path) -> PathBuf {
    let path = dir.join("git");
    let contents = r#"#!/usr/bin/env bash
set -euo pipefail
cmd="${1:-}"
shift || true

case "$cmd" in
  clone)
    url="$1"
    dest="$2"
    case "$url" in
      *missing*)
        echo "fatal: repository '$url' not found" >&2
        exit 128
        ;;
    esac
    if [[ -e "$dest" ]]; then
      echo "fatal: destination path '$dest' already exists" >&2
      exit 128
    fi
    mkdir -p "$dest/.git" "$dest/src/lib"
    echo "ref: refs/heads/main" > "$dest/.git/HEAD"
    printf '%s\n' "$url" > "$dest/.cloned-from"
    cat <<'EOF' > "$dest/README.md"
# Starter
Run starter-app locally.
EOF
    cat <<'EOF' > "$dest/package.json"
{ "name": "starter-app", "private": true }
EOF
    cat <<'EOF' > "$dest/src/lib/config.ts"
export const title = 'Starter';
export const slug = 'starter_app';
export const id = 'starter';
EOF
    ;;
  *)
    echo "unknown command" >&2
    exit 1
    ;;
esac
"#;
    fs::write(&path, contents).unwrap();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).unwrap();
    }
    path
}

pub fn stash_dirs(dir: &Path) -> Vec<PathBuf> {
    fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(".kit-scaffold-vcs-"))
        })
        .collect()
}
