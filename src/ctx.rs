use std::path::PathBuf;

use crate::math::deff::DeffSummary;
use crate::math::msd::LagStatistics;
use crate::schema::v1::{Conversion, TrajMsdV1};
use crate::traj::{Assembly, Session, UnitConversion};

#[derive(Debug, Clone)]
pub struct InputMeta {
    pub sessions: Option<u64>,
    pub records: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub json_path: PathBuf,
    pub tsv_path: PathBuf,
}

#[derive(Debug)]
pub struct Ctx {
    pub inputs: Vec<PathBuf>,
    pub name: Option<String>,
    pub videos: usize,
    pub cutoff: usize,
    pub conversion: UnitConversion,
    pub fps: Option<f64>,
    pub max_lag: usize,
    pub tmin: f64,
    pub tmax: f64,
    pub write_json: bool,
    pub write_tsv: bool,
    pub threads: usize,
    pub session_files: Vec<PathBuf>,
    pub sessions: Vec<Session>,
    pub assembly: Option<Assembly>,
    pub lag_stats: Vec<LagStatistics>,
    pub deff: Option<DeffSummary>,
    pub warnings: Vec<String>,
    pub input_meta: InputMeta,
    pub output: OutputPaths,
    pub report: TrajMsdV1,
}

impl Ctx {
    pub fn new(
        inputs: Vec<PathBuf>,
        out_dir: PathBuf,
        cutoff: usize,
        conversion: UnitConversion,
        tool_version: &str,
    ) -> Self {
        let json_path = out_dir.join("trajmsd.json");
        let tsv_path = out_dir.join("trajmsd.tsv");
        let report = TrajMsdV1::empty(
            tool_version,
            cutoff,
            Conversion {
                xy_scale: conversion.xy_scale,
                z_scale: conversion.z_scale,
                fps: None,
            },
        );
        Self {
            inputs,
            name: None,
            videos: 1,
            cutoff,
            conversion,
            fps: None,
            max_lag: 0,
            tmin: 0.0,
            tmax: f64::INFINITY,
            write_json: false,
            write_tsv: false,
            threads: 0,
            session_files: Vec::new(),
            sessions: Vec::new(),
            assembly: None,
            lag_stats: Vec::new(),
            deff: None,
            warnings: Vec::new(),
            input_meta: InputMeta {
                sessions: None,
                records: None,
            },
            output: OutputPaths {
                out_dir,
                json_path,
                tsv_path,
            },
            report,
        }
    }

    /// Number of lags to compute: the full frame range unless overridden.
    pub fn effective_max_lag(&self) -> usize {
        let frames = self.assembly.as_ref().map(|a| a.frames).unwrap_or(0);
        if self.max_lag == 0 { frames } else { self.max_lag }
    }
}
