//! End-to-end tests for kitscan
//!
//! Each test lays out one or more frontend projects on disk and runs the whole
//! pipeline through `KitScanner`.

use std::fs;
use std::path::Path;
use tempfile::tempdir;
use kitscan::{
    error::{KitScanError, Result},
    models::config::{alias_table, ProjectSpec, Settings},
    KitScanner,
};

fn write(root: &Path, rel: &str, content: &str) -> Result<()> {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

fn settings_for(projects: Vec<ProjectSpec>, aliases: &[&str]) -> Settings {
    Settings {
        projects,
        kit_aliases: alias_table(aliases.iter().copied()),
        ..Settings::default()
    }
}

/// A small Vue 2 style application using the kit both ways
fn create_dashboard(root: &Path) -> Result<()> {
    write(root, "package.json", r#"{ "name": "dashboard" }"#)?;
    write(root, "README.md", "# dashboard")?;
    write(
        root,
        "src/App.vue",
        r#"<template>
  <div id="app">
    <kit-layout>
      <router-view />
    </kit-layout>
  </div>
</template>

<script>
import KitLayout from "@kit/components/Layout";
import { mapState } from "vuex";

export default {
  name: "App",
  components: {
    KitLayout,
    KitToast: () => import("@kit/components/Toast"),
  },
  computed: mapState(["user"]),
};
</script>

<style scoped>
#app { height: 100%; }
</style>
"#,
    )?;
    write(
        root,
        "src/main.js",
        r##"import Vue from "vue";
import App from "./App.vue";
import router from "./router";
import { KitPlugin } from "@kit/core";

Vue.use(KitPlugin);

new Vue({ router, render: (h) => h(App) }).$mount("#app");
"##,
    )?;
    write(
        root,
        "src/router/index.js",
        r#"import Vue from "vue";
import Router from "vue-router";

Vue.use(Router);

export default new Router({
  routes: [{ path: "/", component: () => import("../views/Home.vue") }],
});
"#,
    )?;
    write(
        root,
        "src/views/Home.vue",
        r#"<template>
  <section>
    <kit-card v-for="item in items" :key="item.id">{{ item.title }}</kit-card>
    <script-snippet>
      <script>this is markup text, not the component script</script>
    </script-snippet>
  </section>
</template>

<script>
import { KitCard, KitButton as Btn } from "@kit/components";
import * as KitIcons from "@kit/icons";
import "@kit/styles/home.css";
import Chart from "chart.js";

export default {
  name: "Home",
  components: {
    KitCard,
    Btn,
    KitChart: () => import("@kit/components/charts/KitChart"),
    LocalWidget: () => import("./LocalWidget.vue"),
    KitModal: () => import(/* webpackChunkName: "modal" */ "@kit/components/Modal"),
  },
  data() {
    return { items: [], chart: Chart };
  },
};
</script>
"#,
    )?;
    write(
        root,
        "src/views/LocalWidget.vue",
        r#"<template><p>local</p></template>
<script>
export default { name: "LocalWidget" };
</script>
"#,
    )?;
    write(root, "src/assets/logo.svg", "<svg/>")?;
    write(root, "src/types/index.ts", "export type Id = string;")?;
    Ok(())
}

#[test]
fn test_end_to_end_scenario() -> Result<()> {
    let dir = tempdir()?;
    let root = dir.path().join("foo-frontend");
    write(
        &root,
        "src/A.vue",
        "<template><Foo/></template>\n<script>\nimport { Foo } from \"@kit/x\";\nexport default {};\n</script>\n",
    )?;
    write(
        &root,
        "src/B.vue",
        "<template><div/></template>\n<script>\nexport default { name: \"B\" };\n</script>\n",
    )?;
    write(
        &root,
        "src/registry.js",
        "export default { components: { bar: () => import(\"@kit/y/Bar\") } };\n",
    )?;

    let scanner = KitScanner::new(settings_for(vec![ProjectSpec::new("FOO", &root)], &["@kit"]))?;
    let results = scanner.scan()?;

    let foo = results.project("FOO").unwrap();
    assert_eq!(foo.summary.kit_files, vec!["Foo", "Bar"]);
    assert_eq!(foo.summary.vue_files_count, 2);
    assert_eq!(foo.summary.js_files_count, 1);
    Ok(())
}

#[test]
fn test_realistic_project() -> Result<()> {
    let dir = tempdir()?;
    let root = dir.path().join("dashboard");
    create_dashboard(&root)?;

    let scanner = KitScanner::new(settings_for(vec![ProjectSpec::new("DASH", &root)], &["@kit"]))?;
    let results = scanner.scan()?;
    let summary = &results.project("DASH").unwrap().summary;

    // App.vue (depth 0), then views/Home.vue and views/LocalWidget.vue (depth 1);
    // each component file contributes its dynamic names before its static ones
    assert_eq!(
        summary.kit_files,
        vec![
            "Toast",
            "KitLayout",
            "KitChart",
            "Modal",
            "KitCard",
            "Btn",
            "KitIcons",
            "KitPlugin",
        ]
    );
    assert_eq!(summary.vue_files_count, 3);
    assert_eq!(summary.js_files_count, 2);
    Ok(())
}

#[test]
fn test_default_configuration_matches_nothing() -> Result<()> {
    let dir = tempdir()?;
    let root = dir.path().join("dashboard");
    create_dashboard(&root)?;

    let scanner = KitScanner::new(settings_for(vec![ProjectSpec::new("DASH", &root)], &[]))?;
    let summary = scanner.scan()?.projects.remove(0).summary;

    assert!(summary.kit_files.is_empty());
    assert_eq!(summary.vue_files_count, 3);
    assert_eq!(summary.js_files_count, 2);
    Ok(())
}

#[test]
fn test_alias_matching_is_substring_based() -> Result<()> {
    let dir = tempdir()?;
    let root = dir.path().join("app");
    write(
        &root,
        "src/main.js",
        r#"
import { A } from "@company/kit-components";
import { B } from "node_modules/@company/kit-components/dist";
import { C } from "@company/kit";
"#,
    )?;

    let scanner = KitScanner::new(settings_for(
        vec![ProjectSpec::new("APP", &root)],
        &["kit-components"],
    ))?;
    let summary = scanner.scan()?.projects.remove(0).summary;

    assert_eq!(summary.kit_files, vec!["A", "B"]);
    Ok(())
}

#[test]
fn test_multiple_projects_in_order() -> Result<()> {
    let dir = tempdir()?;
    let first = dir.path().join("first");
    let second = dir.path().join("second");
    create_dashboard(&first)?;
    write(&second, "src/index.js", "import Grid from '@kit/grid';\n")?;

    let scanner = KitScanner::new(settings_for(
        vec![
            ProjectSpec::new("SECOND", &second),
            ProjectSpec::new("FIRST", &first),
        ],
        &["@kit"],
    ))?;
    let results = scanner.scan()?;

    assert_eq!(results.projects.len(), 2);
    assert_eq!(results.projects[0].name, "SECOND");
    assert_eq!(results.projects[0].summary.kit_files, vec!["Grid"]);
    assert_eq!(results.projects[0].summary.vue_files_count, 0);
    assert_eq!(results.projects[1].name, "FIRST");
    Ok(())
}

#[test]
fn test_parallel_equivalence() -> Result<()> {
    let dir = tempdir()?;
    let root = dir.path().join("dashboard");
    create_dashboard(&root)?;
    for i in 0..40 {
        write(
            &root,
            &format!("src/generated/g{:02}/Gen{}.vue", i, i),
            &format!(
                "<script>\nimport {{ KitCard, Gen{} }} from '@kit/components';\nexport default {{ components: {{ lazy: () => import('@kit/lazy/Lazy{}') }} }};\n</script>\n",
                i,
                i % 5
            ),
        )?;
    }

    let sequential = settings_for(vec![ProjectSpec::new("DASH", &root)], &["@kit"]);
    let parallel = Settings {
        parallel: true,
        ..sequential.clone()
    };

    let a = KitScanner::new(sequential)?.scan()?;
    let b = KitScanner::new(parallel)?.scan()?;

    assert_eq!(a.projects, b.projects);
    assert_eq!(a.projects[0].summary.vue_files_count, 43);
    Ok(())
}

#[test]
fn test_exclude_patterns() -> Result<()> {
    let dir = tempdir()?;
    let root = dir.path().join("dashboard");
    create_dashboard(&root)?;
    write(&root, "src/__mocks__/Broken.vue", "<template>no script here</template>")?;

    let settings = Settings {
        exclude_patterns: vec!["__mocks__".to_string()],
        ..settings_for(vec![ProjectSpec::new("DASH", &root)], &["@kit"])
    };
    let summary = KitScanner::new(settings)?.scan()?.projects.remove(0).summary;

    assert_eq!(summary.vue_files_count, 3);
    Ok(())
}

#[test]
fn test_component_without_script_fails_the_run() -> Result<()> {
    let dir = tempdir()?;
    let root = dir.path().join("dashboard");
    create_dashboard(&root)?;
    write(&root, "src/views/Static.vue", "<template><p>static</p></template>\n")?;

    let err = KitScanner::new(settings_for(vec![ProjectSpec::new("DASH", &root)], &["@kit"]))?
        .scan()
        .unwrap_err();

    match err {
        KitScanError::MissingScriptBlock { path } => assert!(path.ends_with("views/Static.vue")),
        other => panic!("Expected MissingScriptBlock, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_unparseable_script_fails_the_run() -> Result<()> {
    let dir = tempdir()?;
    let root = dir.path().join("app");
    write(&root, "src/App.vue", "<script>\nexport default { components: { a: () => import('@kit/a/A') };\n</script>")?;

    let err = KitScanner::new(settings_for(vec![ProjectSpec::new("APP", &root)], &["@kit"]))?
        .scan()
        .unwrap_err();

    assert!(matches!(err, KitScanError::Syntax { .. }));
    assert_eq!(err.path().map(|p| p.ends_with("App.vue")), Some(true));
    Ok(())
}

#[test]
fn test_missing_src_directory_fails_the_run() -> Result<()> {
    let dir = tempdir()?;
    let root = dir.path().join("no-src");
    write(&root, "index.js", "import { A } from '@kit/a';")?;

    let err = KitScanner::new(settings_for(vec![ProjectSpec::new("NOSRC", &root)], &["@kit"]))?
        .scan()
        .unwrap_err();

    assert!(matches!(err, KitScanError::DirectoryRead { .. }));
    Ok(())
}
