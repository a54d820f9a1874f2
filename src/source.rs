//! Where monster records come from: the monster API over HTTP, or a directory of JSON files.

use {
    std::{
        env,
        fs::File,
        io::BufReader,
        path::PathBuf,
        time::Duration
    },
    log::debug,
    serde::de::DeserializeOwned,
    url::Url,
    crate::{
        Error,
        IntoResultExt as _,
        IoResultExt as _,
        monster::{
            MonsterData,
            MonsterId
        }
    }
};

#[cfg(feature = "local")] const LOCAL_API: &str = "http://localhost:18900/";

/// Supplies the monster list and individual monster records.
///
/// Both calls block until the data is available. Callers make them one at a time.
pub trait MonsterSource {
    fn monster_list(&self) -> Result<Vec<MonsterId>, Error>;
    fn monster_data(&self, id: MonsterId) -> Result<MonsterData, Error>;
}

impl<S: MonsterSource + ?Sized> MonsterSource for &S {
    fn monster_list(&self) -> Result<Vec<MonsterId>, Error> { (**self).monster_list() }
    fn monster_data(&self, id: MonsterId) -> Result<MonsterData, Error> { (**self).monster_data(id) }
}

impl<S: MonsterSource + ?Sized> MonsterSource for Box<S> {
    fn monster_list(&self) -> Result<Vec<MonsterId>, Error> { (**self).monster_list() }
    fn monster_data(&self, id: MonsterId) -> Result<MonsterData, Error> { (**self).monster_data(id) }
}

/// The monster API, queried at `<base>/monsters` and `<base>/monsters/<id>`.
pub struct Api {
    base: Url,
    client: reqwest::blocking::Client
}

impl Api {
    pub fn new(base: &str) -> Result<Api, Error> {
        let mut base = Url::parse(base)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Api {
            base,
            client: reqwest::blocking::Client::builder()
                .timeout(Duration::from_secs(60))
                .build()?
        })
    }

    pub fn base(&self) -> &Url { &self.base }

    fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.base.join(path)?;
        debug!("GET {}", url);
        let response = self.client.get(url.clone())
            .send()
            .and_then(|response| response.error_for_status())
            .annotate(&url)?;
        response.json().annotate(url)
    }
}

impl MonsterSource for Api {
    fn monster_list(&self) -> Result<Vec<MonsterId>, Error> {
        self.get("monsters")
    }

    fn monster_data(&self, id: MonsterId) -> Result<MonsterData, Error> {
        self.get(&format!("monsters/{}", urlencoding::encode(&id.to_string())))
    }
}

/// A directory holding `monsters.json` (the id list) and one `<id>.json` per monster.
pub struct DataDir {
    path: PathBuf
}

impl DataDir {
    pub fn new(path: impl Into<PathBuf>) -> DataDir {
        DataDir { path: path.into() }
    }

    fn read<T: DeserializeOwned>(&self, file_name: &str) -> Result<T, Error> {
        let path = self.path.join(file_name);
        debug!("reading {}", path.display());
        let file = File::open(&path).at(&path)?;
        serde_json::from_reader(BufReader::new(file)).annotate(path.display())
    }
}

impl MonsterSource for DataDir {
    fn monster_list(&self) -> Result<Vec<MonsterId>, Error> {
        self.read("monsters.json")
    }

    fn monster_data(&self, id: MonsterId) -> Result<MonsterData, Error> {
        self.read(&format!("{}.json", id))
    }
}

/// Which data source to search, as configured by environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Config {
    /// `MONSTER_SEARCH_DATA`: a local data directory.
    DataDir(PathBuf),
    /// `MONSTER_SEARCH_API`: the base URL of the monster API.
    Api(String)
}

impl Config {
    /// Reads the configuration from the environment.
    ///
    /// # Features
    ///
    /// If the `local` feature is enabled (it is by default) and neither variable is set, the API at `localhost:18900` is used.
    /// Otherwise, a missing `MONSTER_SEARCH_API` is an error.
    pub fn from_env() -> Result<Config, Error> {
        if let Some(dir) = env::var_os("MONSTER_SEARCH_DATA") {
            return Ok(Config::DataDir(dir.into()))
        }
        match env::var("MONSTER_SEARCH_API") {
            Ok(base) => Ok(Config::Api(base)),
            #[cfg(feature = "local")] Err(env::VarError::NotPresent) => Ok(Config::Api(LOCAL_API.to_owned())),
            Err(e) => Err(e).annotate("MONSTER_SEARCH_API")
        }
    }

    pub fn into_source(self) -> Result<Box<dyn MonsterSource>, Error> {
        Ok(match self {
            Config::DataDir(path) => Box::new(DataDir::new(path)),
            Config::Api(base) => Box::new(Api::new(&base)?)
        })
    }

    pub fn describe_location(&self) -> String {
        match self {
            Config::DataDir(path) => path.display().to_string(),
            Config::Api(base) => base.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_base_gets_trailing_slash() {
        let api = Api::new("http://example.com/mh").unwrap();
        assert_eq!(api.base().as_str(), "http://example.com/mh/");
        assert_eq!(api.base().join("monsters/3").unwrap().as_str(), "http://example.com/mh/monsters/3");
    }

    #[test]
    fn invalid_api_base_is_rejected() {
        match Api::new("not a url") {
            Err(Error::UrlParse(_)) => {}
            Err(e) => panic!("unexpected error: {:?}", e),
            Ok(_) => panic!("accepted invalid base URL")
        }
    }

    #[test]
    fn data_dir_reports_missing_file_path() {
        let dir = tempfile::tempdir().unwrap();
        match DataDir::new(dir.path()).monster_data(MonsterId(4)) {
            Err(Error::Io(_, Some(path))) => assert_eq!(path, dir.path().join("4.json")),
            Err(e) => panic!("unexpected error: {:?}", e),
            Ok(_) => panic!("read a monster from an empty directory")
        }
    }
}
