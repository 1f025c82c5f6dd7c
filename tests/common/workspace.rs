//! Temporary on-disk workspace with a palette file and helpers for images.

use std::path::{Path, PathBuf};

use stitch_engine::{Engine, Image};
use stitchwork::services::{load_palette, write_png, ScriptRunner};
use tempfile::TempDir;

use super::fixtures::PALETTE_CSV;

pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    /// Create a workspace containing `palette.csv`
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(dir.path().join("palette.csv"), PALETTE_CSV).expect("write palette");
        Self { dir }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write `image` as a PNG and return its path
    pub fn write_image(&self, name: &str, image: &Image) -> PathBuf {
        let path = self.path(name);
        write_png(image, &path).expect("write png");
        path
    }

    pub fn read_text(&self, name: &str) -> String {
        std::fs::read_to_string(self.path(name)).expect("read text")
    }

    /// Runner over the workspace palette with a fixed mosaic seed
    pub fn runner(&self) -> ScriptRunner {
        let palette = load_palette(&self.path("palette.csv")).expect("load palette");
        ScriptRunner::new(Engine::with_seed(11), palette)
    }

    /// Turn `{dir}` placeholders into the workspace path
    pub fn script(&self, template: &str) -> String {
        template.replace("{dir}", &self.root().display().to_string())
    }
}
