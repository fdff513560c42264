//! PWA head tags: manifest, icons, theme color.
//!
//! All URLs go through the asset path resolver so they point inside the
//! sub-path when the app is deployed under one.

use leptos::prelude::*;
use leptos_meta::{Link, Meta};

use crate::util::asset_path::{AssetPath, use_asset};

pub const MANIFEST: AssetPath = AssetPath::from_static("/manifest.json");
pub const APP_ICON: AssetPath = AssetPath::from_static("/icon-192x192.png");
pub const APP_ICON_LARGE: AssetPath = AssetPath::from_static("/icon-512x512.png");
pub const FAVICON: AssetPath = AssetPath::from_static("/favicon.ico");

/// Files the host must serve next to the app, at their resolved URLs.
pub const PUBLIC_ASSETS: [AssetPath; 4] = [MANIFEST, FAVICON, APP_ICON, APP_ICON_LARGE];

const THEME_COLOR: &str = "#1d9bf0";

#[component]
pub fn PwaHead() -> impl IntoView {
    view! {
        <Link rel="manifest" href=use_asset(&MANIFEST)/>
        <Link rel="icon" href=use_asset(&FAVICON)/>
        <Link rel="apple-touch-icon" href=use_asset(&APP_ICON_LARGE)/>
        <Meta name="theme-color" content=THEME_COLOR/>
        <Meta name="apple-mobile-web-app-capable" content="yes"/>
    }
}
