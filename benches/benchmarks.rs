//! Performance benchmarks for depsift

use std::collections::HashSet;
use std::path::Path;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use depsift::test_utils::TestTree;
use depsift::{Auditor, Report, WalkerConfig};

const GO_SOURCE: &str = r#"// Package server wires the HTTP handlers.
package server

/*
#cgo LDFLAGS: -lm
#include <math.h>
*/
import "C"

import (
	"context"
	"encoding/json"
	"net/http"

	"github.com/go-chi/chi/v5"
	yaml "gopkg.in/yaml.v3"

	"example.com/app/internal/store"
)

type Server struct {
	store *store.Store
}

func (s *Server) Routes() http.Handler {
	r := chi.NewRouter()
	return r
}
"#;

fn create_tree_with_files(file_count: usize) -> TestTree {
    let tree = TestTree::with_module("example.com/app");
    let mut sum = String::new();
    for i in 0..file_count {
        let dep = format!("github.com/org{}/lib", i % 50);
        sum.push_str(&format!("{dep} v1.0.{i} h1:x=\n"));
        let local = format!("example.com/app/pkg{}", i % 20);
        tree.add_go_file(
            &format!("pkg{}/file{}.go", i % 20, i),
            "pkg",
            &["fmt", "os", dep.as_str(), local.as_str()],
        );
    }
    tree.add_file("go.sum", &sum);
    tree
}

fn bench_scan_source(c: &mut Criterion) {
    c.bench_function("scan_source", |b| {
        b.iter(|| {
            let mut refs = HashSet::new();
            depsift::scanner::scan_source(
                Path::new("server.go"),
                black_box(GO_SOURCE.as_bytes()),
                &mut refs,
            )
            .unwrap();
            refs
        })
    });
}

fn bench_classify(c: &mut Criterion) {
    let references: HashSet<String> = (0..1000)
        .map(|i| match i % 3 {
            0 => format!("pkg{i}"),
            1 => format!("example.com/app/internal/p{i}"),
            _ => format!("github.com/org/p{i}"),
        })
        .collect();
    let locked: HashSet<String> = (0..500).map(|i| format!("github.com/org/p{i}")).collect();

    c.bench_function("classify_1000", |b| {
        b.iter(|| Report::classify(black_box(&references), &locked, Some("example.com/app")))
    });
}

fn bench_audit_tree(c: &mut Criterion) {
    let tree = create_tree_with_files(200);

    c.bench_function("audit_200_files", |b| {
        b.iter(|| Auditor::run(black_box(tree.path()), WalkerConfig::default()).unwrap())
    });
}

criterion_group!(benches, bench_scan_source, bench_classify, bench_audit_tree);
criterion_main!(benches);
