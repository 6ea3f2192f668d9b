//! The osu! beatmap format parser.
//!
//! osu! stores its playable levels ("beatmaps", or charts) as line oriented text files with the
//! `.osu` extension. A file starts with a `osu file format v<N>` line, followed by sections such
//! as `[General]`, `[TimingPoints]` and `[HitObjects]`.
//!
//! This crate parses such a file into a [`osu::model::Beatmap`], assigning combo numbers and
//! combo colours to every hit object on the way, and provides a query to find the timing point
//! governing a moment of the chart ([`osu::model::Beatmap::timing_at`]).
//!
//! # Example
//!
//! ```
//! use osu_rs::osu::parse_osu;
//!
//! let source = "osu file format v14\n\n[TimingPoints]\n0,500,4,1,0,100,1,0\n";
//! let beatmap = parse_osu(source).expect("valid beatmap");
//! assert_eq!(beatmap.format_version, "v14");
//! assert_eq!(beatmap.timing_at(1000).map(|point| point.payload.bpm), Some(120.0));
//! ```
//!
//! # Features
//!
//! - `diagnostics` (default): renders parse errors with [`ariadne`](https://docs.rs/ariadne).
//! - `serde`: derives `Serialize`/`Deserialize` for the whole beatmap model.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod diagnostics;
pub mod osu;
mod util;
