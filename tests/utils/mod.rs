use std::fs;
use std::path::{Path, PathBuf};

use logainm_matchup::MatchupConfig;
use tempfile::TempDir;

/// Registry around County Carlow, including one id two townlands both
/// resolve to (12345) and two same-named townlands under one parish; 32 has
/// a permalink and a placenamesni.org link
pub const NAMES: &str = "\
logainm_id,logainm_category_code,logainm_permalink,placenamesni_link,name_en,name_ga
1,CON,https://www.logainm.ie/en/1,,Carlow,Ceatharlach
10,BAR,,,Rathvilly,Ráth Bhile
11,BAR,,,Forth,Fotharta
20,PAR,,,Tullowmagimma,Tulach Ó Maigh Ime
21,PAR,,,Saint Mullins,Tigh Moling
30,BF,,,Ballyboy,An Baile Buí
31,BF,,,Castlemore,An Caisleán Mór
32,BF,https://www.logainm.ie/en/32.aspx,http://www.placenamesni.org/resultdetails.php?entry=4321,Upper Kilmore,An Choill Mhór Uachtarach
33,BF,,,Knockmore,An Cnoc Mór
34,BF,,,Knockmore,An Cnoc Mór
12345,BF,,,Ardristan,Ard Dhristeáin
";

pub const CONTAINS: &str = "\
outer_obj_id,inner_obj_id
1,10
1,11
10,20
11,21
20,30
20,31
20,32
20,12345
21,33
21,34
";

pub const COUNTIES: &str = "\
OSM_ID,NAME_EN,NAME_TAG,NAME_GA,LOGAINM_RE
-1,Carlow,,Ceatharlach,
";

pub const BARONIES: &str = "\
OSM_ID,NAME_EN,LOGAINM_RE,CO_OSM_ID
-10,Rathvilly,10,-1
-11,Forth,,-1
";

pub const CIVIL_PARISHES: &str = "\
OSM_ID,NAME_EN,LOGAINM_RE,CO_OSM_ID,BAR_OSM_ID
-20,Tullowmagimma,,-1,-10
-21,St. Mullins,,-1,-11
";

/// -37 is listed under two parishes, -38 has no registry namesake, -39 no parish
pub const TOWNLANDS: &str = "\
OSM_ID,NAME_EN,NAME_TAG,LOGAINM_RE,CO_OSM_ID,BAR_OSM_ID,CP_OSM_ID
-30,Ballyboy,,,-1,-10,-20
-31,,Castlemore,,-1,-10,-20
-32,Kilmore Upper,,,-1,-10,-20
-33,Knockmore,,,-1,-11,-21
-35,Ardristan,,,-1,-10,-20
-36,Ardristan,,,-1,-10,-20
-37,Lonely,,,-1,-10,-20
-37,Lonely,,,-1,-11,-21
-38,Nowhere,,,-1,-10,-20
-39,Orphan,,,-1,,
";

/// Live relations; 31 is already tagged
pub const BOUNDARIES: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<osm version="0.6" generator="fixture">
  <relation id="30" version="2">
    <member type="way" ref="300" role="outer"/>
    <tag k="boundary" v="administrative"/>
    <tag k="name" v="Ballyboy"/>
    <tag k="name:en" v="Ballyboy Townland"/>
  </relation>
  <relation id="31" version="4">
    <tag k="name" v="Castlemore"/>
    <tag k="logainm:ref" v="31"/>
  </relation>
  <relation id="32" version="1">
    <tag k="name" v="Kilmore Upper"/>
  </relation>
  <relation id="99" version="1">
    <tag k="name" v="Elsewhere"/>
    <tag k="logainm:ref" v="777"/>
  </relation>
  <relation id="98" version="1">
    <tag k="name" v="Also Elsewhere"/>
    <tag k="logainm:ref" v="777"/>
  </relation>
</osm>
"#;

/// Extracts, registry and live dataset written to a temporary directory
pub struct Fixture {
    pub dir: TempDir,
    pub config: MatchupConfig,
}

impl Fixture {
    #[must_use]
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config = MatchupConfig {
            extract_dir: dir.path().to_path_buf(),
            registry_names: dir.path().join("names.csv"),
            registry_contains: dir.path().join("geometric_contains.csv"),
            ..MatchupConfig::default()
        };

        let files = [
            ("names.csv", NAMES),
            ("geometric_contains.csv", CONTAINS),
            ("counties-no-geom.csv", COUNTIES),
            ("baronies-no-geom.csv", BARONIES),
            ("civil_parishes-no-geom.csv", CIVIL_PARISHES),
            ("townlands-no-geom.csv", TOWNLANDS),
            ("boundaries.osm", BOUNDARIES),
        ];
        for (name, contents) in files {
            write_file(dir.path(), name, contents);
        }

        Self { dir, config }
    }

    #[must_use]
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    #[must_use]
    pub fn osm(&self) -> PathBuf {
        self.path("boundaries.osm")
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Write `contents` to `dir/name`
pub fn write_file(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).expect("write fixture file");
}
