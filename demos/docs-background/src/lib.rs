use wasm_bindgen::prelude::*;

use mote_engine::*;

mod site;
use site::site_config;

mote_web::export_field!(site_config(), "docs-background");
