//! Shared fixture: a small exported repository with one of each case.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

pub const R1: &str = "{11111111-1111-1111-1111-111111111111}";
pub const R2: &str = "{22222222-2222-2222-2222-222222222222}";

fn link(guid: &str, file: &str) -> String {
    format!(
        "/NR/rdonlyres/{}/0/{file}",
        guid.trim_matches(|c| c == '{' || c == '}')
    )
}

fn html(guids: &[(&str, &str)]) -> String {
    guids
        .iter()
        .map(|(g, f)| format!(r#"<p><a href="{}">{f}</a></p>"#, link(g, f)))
        .collect()
}

/*
Resources > Galleries > { A, B, HR, Legal }

R1 lives in A: correct for the A team on p1, wrong for the B team on p2/p3 (conflict)
R2 lives in Legal: wrong for Finance+HR on p4 (single destination: Finance)
R3 lives in HR: correct for Finance+HR on p4
R4 lives in Legal: only used on an expired page
R5 lives in Legal: only used on an ignored channel
*/
pub fn snapshot() -> Value {
    json!({
        "root_gallery": "root",
        "folders": [
            { "id": "root", "name": "Resources" },
            { "id": "galleries", "name": "Galleries", "parent": "root" },
            { "id": "g-a", "name": "A", "parent": "galleries" },
            { "id": "g-b", "name": "B", "parent": "galleries" },
            { "id": "g-hr", "name": "HR", "parent": "galleries" },
            { "id": "g-legal", "name": "Legal", "parent": "galleries" },
            { "id": "legal-2024", "name": "2024", "parent": "g-legal" }
        ],
        "resources": [
            { "guid": R1, "path": "/Resources/Galleries/A/r1.pdf", "folder": "g-a" },
            { "guid": R2, "path": "/Resources/Galleries/Legal/2024/r2.pdf", "folder": "legal-2024" },
            { "guid": "{33333333-3333-3333-3333-333333333333}", "path": "/Resources/Galleries/HR/r3.png",
              "folder": "g-hr", "url": "/images/r3.png" },
            { "guid": "{44444444-4444-4444-4444-444444444444}", "path": "/Resources/Galleries/Legal/r4.pdf", "folder": "g-legal" },
            { "guid": "{55555555-5555-5555-5555-555555555555}", "path": "/Resources/Galleries/Legal/r5.pdf", "folder": "g-legal" }
        ],
        "channels": [
            {
                "guid": "a-team",
                "groups": [{ "name": "A", "role": "editor" }],
                "pages": [{
                    "guid": "p1", "state": "published",
                    "published_url": "/a/p1.htm", "unpublished_url": "/NR/exeres/p1.htm",
                    "placeholders": [{ "name": "body", "kind": "html", "content": html(&[(R1, "r1.pdf")]) }]
                }]
            },
            {
                "guid": "b-team",
                "groups": [{ "name": "B", "role": "editor" }, { "name": "Web", "role": "moderator" }],
                "pages": [
                    {
                        "guid": "p2", "state": "unpublished",
                        "published_url": "/b/p2.htm", "unpublished_url": "/NR/exeres/p2.htm",
                        "placeholders": [{ "name": "body", "kind": "html", "content": html(&[(R1, "r1.pdf")]) }]
                    },
                    {
                        "guid": "p3", "state": "published",
                        "published_url": "/b/p3.htm", "unpublished_url": "/NR/exeres/p3.htm",
                        "placeholders": [{ "name": "body", "kind": "html", "content": html(&[(R1, "r1.pdf"), (R1, "again.pdf")]) }]
                    }
                ]
            },
            {
                "guid": "corporate",
                "groups": [{ "name": "Finance", "role": "editor" }, { "name": "HR", "role": "editor" }],
                "pages": [
                    {
                        "guid": "p4", "state": "published",
                        "published_url": "/corporate/p4.htm", "unpublished_url": "/NR/exeres/p4.htm",
                        "placeholders": [
                            { "name": "photo", "kind": "image", "src": "/images/r3.png" },
                            { "name": "body", "kind": "html", "content": html(&[(R2, "r2.pdf")]) }
                        ]
                    },
                    {
                        "guid": "p5", "state": "published",
                        "published_url": "/corporate/p5.htm", "unpublished_url": "/NR/exeres/p5.htm",
                        "expires_at": "2000-01-01T00:00:00Z",
                        "placeholders": [{ "name": "body", "kind": "html",
                            "content": html(&[("{44444444-4444-4444-4444-444444444444}", "r4.pdf")]) }]
                    }
                ]
            },
            {
                "guid": "archive",
                "groups": [{ "name": "Finance", "role": "editor" }],
                "pages": [{
                    "guid": "p6", "state": "published",
                    "published_url": "/archive/p6.htm", "unpublished_url": "/NR/exeres/p6.htm",
                    "placeholders": [{ "name": "body", "kind": "html",
                        "content": html(&[("{55555555-5555-5555-5555-555555555555}", "r5.pdf")]) }]
                }]
            },
            {
                "guid": "unstaffed",
                "pages": [{
                    "guid": "p7", "state": "published",
                    "published_url": "/unstaffed/p7.htm", "unpublished_url": "/NR/exeres/p7.htm",
                    "placeholders": [{ "name": "body", "kind": "html", "content": html(&[(R2, "r2.pdf")]) }]
                }]
            }
        ]
    })
}

pub fn config() -> Value {
    json!({
        "ignore_channels": ["archive"],
        "email_from": "cms@example.org",
        "email_to": "webteam@example.org",
        "base_url": "https://www.example.org/"
    })
}

pub fn write_json(dir: &Path, name: &str, value: &Value) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}

pub struct Fixture {
    pub dir: TempDir,
    pub snapshot: PathBuf,
    pub config: PathBuf,
}

pub fn fixture() -> Fixture {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let snapshot = write_json(dir.path(), "snapshot.json", &snapshot());
    let config = write_json(dir.path(), "audit.json", &config());
    Fixture {
        dir,
        snapshot,
        config,
    }
}
