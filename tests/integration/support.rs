//! Go module fixtures written to temporary directories

use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const MODULE: &str = "example.com/shop";

/// Write `content` to `rel` under `root`, creating parent directories
pub fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// A small web shop module:
///
/// ```text
/// cmd/server   -> internal/api, pkg/log
/// internal/api -> internal/store, pkg/log, internal/api (self)
/// internal/store -> pkg/log, pkg/db-util
/// pkg/db-util  -> (external only)
/// pkg/log      -> (external only)
/// tools/gen    -> never reached
/// ```
pub fn create_shop_module() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    write_file(root, "go.mod", "module example.com/shop\n\ngo 1.22\n\nrequire github.com/lib/pq v1.10.9\n");

    write_file(
        root,
        "cmd/server/main.go",
        r#"// Command server runs the shop.
package main

import (
	"fmt"
	"net/http"

	"example.com/shop/internal/api"
	logpkg "example.com/shop/pkg/log"
)

func main() {
	logpkg.Info("starting")
	fmt.Println(http.ListenAndServe(":8080", api.Handler()))
}
"#,
    );
    write_file(
        root,
        "cmd/server/main_test.go",
        r#"package main

import (
	"testing"

	"example.com/shop/tools/gen"
)

func TestMain(t *testing.T) { gen.Run() }
"#,
    );

    write_file(
        root,
        "internal/api/handler.go",
        r#"package api

import "net/http"
import "example.com/shop/internal/store"

/* Handler wires the routes.
   It never imports "example.com/shop/tools/gen". */
func Handler() http.Handler { return store.Mux() }
"#,
    );
    write_file(
        root,
        "internal/api/routes.go",
        r#"package api

import (
	_ "example.com/shop/internal/api"
	l "example.com/shop/pkg/log"
)

var routes = []string{"/"}
"#,
    );

    write_file(
        root,
        "internal/store/store.go",
        r#"package store

import (
	"database/sql"
	"net/http"

	_ "github.com/lib/pq"

	"example.com/shop/pkg/db-util"
	"example.com/shop/pkg/log"
)

func Mux() *http.ServeMux { return http.NewServeMux() }
"#,
    );
    write_file(root, "internal/store/README.md", "# store\n");

    write_file(root, "pkg/db-util/util.go", "package dbutil\n\nimport \"strings\"\n");
    write_file(root, "pkg/log/log.go", "package log\n\nimport \"os\"\n\nfunc Info(string) {}\n");

    write_file(root, "tools/gen/gen.go", "package gen\n\nfunc Run() {}\n");

    dir
}
