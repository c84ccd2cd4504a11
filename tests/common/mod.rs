#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const LIST_PATH: &str = "/products/types/lsr";

fn resource(rel: &str) -> String {
    let p = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/resources").join(rel);
    fs::read_to_string(&p).unwrap_or_else(|e| panic!("read {}: {}", p.display(), e))
}

/// Reads a mock body and points its `{{base}}` placeholders at the mock server.
pub fn read_mock(name: &str, base: &str) -> String {
    resource(&format!("mocks/{}", name)).replace("{{base}}", base)
}

/// `productText` of a mock product, as it must appear in the output file.
pub fn product_text(name: &str) -> String {
    let v: serde_json::Value = serde_json::from_str(&resource(&format!("mocks/{}", name))).unwrap();
    v["productText"].as_str().unwrap().to_string()
}

pub async fn mount_list(server: &MockServer, body: String) {
    Mock::given(method("GET"))
        .and(path(LIST_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(server)
        .await;
}

pub async fn mount_product(server: &MockServer, product_path: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(product_path))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(server)
        .await;
}

/// Listing with a summary, a hail and a wind report, in that order.
pub async fn mount_lsr_fixture(server: &MockServer) {
    let base = server.uri();
    mount_list(server, read_mock("lsr_list.json", &base)).await;
    mount_product(server, "/products/6c1a5a9e-summary", read_mock("product_summary.json", &base)).await;
    mount_product(server, "/products/0b3f2d41-hail", read_mock("product_hail.json", &base)).await;
    mount_product(server, "/products/9e77c0aa-wind", read_mock("product_wind.json", &base)).await;
}

pub fn render_config(base: &str, out_path: &Path) -> tempfile::NamedTempFile {
    let text = resource("configs/harvest.yaml")
        .replace("{{base}}", base)
        .replace("{{out}}", out_path.to_str().unwrap());
    let cfg_file = tempfile::NamedTempFile::new().unwrap();
    fs::write(cfg_file.path(), text).unwrap();
    cfg_file
}

pub fn separator() -> String {
    "=".repeat(40)
}
