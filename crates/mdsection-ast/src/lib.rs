/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Document tree type definitions for mdsection.
 *
 * This crate provides the mdast-shaped node types that the mdsection
 * transforms read and rewrite. It has minimal dependencies (serde,
 * serde_json, hashlink) and round-trips node types it does not model
 * explicitly without losing fields.
 */

pub mod node;

pub use node::{Code, Element, Export, Fields, Heading, Node, OtherNode, Root, Text};
