use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::{api_interfaces::countries, decode::null_as_default, error::GetError, Client};

const FUNCTION: &str = "getcountriesdata";

/// Countries served by the API, sent as their numeric vendor id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum CountryCode {
    NL,
    DE,
    BE,
    AT,
    CH,
    LU,
    PL,
    PT,
    VN,
}

impl CountryCode {
    pub const ALL: [CountryCode; 9] = [
        Self::NL,
        Self::DE,
        Self::BE,
        Self::AT,
        Self::CH,
        Self::LU,
        Self::PL,
        Self::PT,
        Self::VN,
    ];

    pub fn id(self) -> u16 {
        match self {
            Self::NL => 1,
            Self::DE => 2,
            Self::BE => 3,
            Self::AT => 5,
            Self::CH => 6,
            Self::LU => 10,
            Self::PL => 180,
            Self::PT => 181,
            Self::VN => 239,
        }
    }

    pub fn alpha2(self) -> &'static str {
        match self {
            Self::NL => "NL",
            Self::DE => "DE",
            Self::BE => "BE",
            Self::AT => "AT",
            Self::CH => "CH",
            Self::LU => "LU",
            Self::PL => "PL",
            Self::PT => "PT",
            Self::VN => "VN",
        }
    }

    pub fn from_id(id: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|code| code.id() == id)
    }
}

/// Formats as the numeric id, which is what the API expects.
impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown country code: {0}")]
pub struct ParseCountryCodeError(String);

/// Accepts either the two-letter code (any case) or the numeric id.
impl FromStr for CountryCode {
    type Err = ParseCountryCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(id) = s.parse::<u16>() {
            return Self::from_id(id).ok_or_else(|| ParseCountryCodeError(s.to_string()));
        }
        Self::ALL
            .into_iter()
            .find(|code| code.alpha2().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseCountryCodeError(s.to_string()))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AvailableCountries {
    pub countries: Vec<Country>,
    pub translations: Vec<CountryTranslation>,
    pub em: Vec<Value>,
    pub revision: ApiRevision,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ApiRevision {
    pub rd: i64,
    pub rdc: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Country {
    pub country_a2: String,
    pub domain: String,
    pub api_domain: String,
    pub p1: String,
    pub p2: String,
    pub p3: String,
    pub gse: String,
    pub cre: String,
    pub e1: String,
    pub e2: String,
    pub pse: String,
    pub name: String,
    pub email_address: String,
    pub logo_url: String,
    pub flag_icon_url: String,
    pub small_logo_url: String,
    pub internal_code: String,
    pub sc: String,
    pub si: String,
    pub pie: i64,
    pub lye: i64,
    pub lyv: i64,
    pub lyn: String,
    pub payment_methods: Vec<i64>,
    pub languages: Vec<String>,
    /// Country name keyed by language.
    pub name_translations: BTreeMap<String, String>,
    pub psw: Value,
    pub taa: Value,
    pub mv: Value,
    pub tip: bool,
    pub service_keys: ServiceKeys,
    pub dcr: String,
    pub mor: String,
}

/// Third party service credentials configured for a country (`ac`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceKeys {
    #[serde(deserialize_with = "null_as_default")]
    pub gp: ServiceKey,
    #[serde(deserialize_with = "null_as_default")]
    pub nm: ServiceKey,
    #[serde(alias = "as", deserialize_with = "null_as_default")]
    pub active_service: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceKey {
    #[serde(alias = "sid", deserialize_with = "null_as_default")]
    pub service_id: i64,
    #[serde(alias = "ak", deserialize_with = "null_as_default")]
    pub api_key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub pb: String,
    #[serde(alias = "ul", deserialize_with = "null_as_default")]
    pub url: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CountryTranslation {
    pub country_id: String,
    pub translations: BTreeMap<String, String>,
    pub image: String,
    pub sub_translations: Vec<SubTranslation>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SubTranslation {
    pub id: String,
    pub translations: BTreeMap<String, String>,
}

impl From<countries::Country> for Country {
    fn from(raw: countries::Country) -> Self {
        Self {
            country_a2: raw.cy,
            domain: raw.nm,
            api_domain: raw.su,
            p1: raw.p1,
            p2: raw.p2,
            p3: raw.p3,
            gse: raw.gse,
            cre: raw.cre,
            e1: raw.e1,
            e2: raw.e2,
            pse: raw.pse,
            name: raw.tw,
            email_address: raw.se,
            logo_url: raw.lo,
            flag_icon_url: raw.fl,
            small_logo_url: raw.hl,
            internal_code: raw.ic,
            sc: raw.sc,
            si: raw.si,
            pie: raw.pie,
            lye: raw.lye,
            lyv: raw.lyv,
            lyn: raw.lyn,
            payment_methods: raw.erp.pm,
            languages: raw.ls.la,
            name_translations: raw.cn,
            psw: raw.psw,
            taa: raw.taa,
            mv: raw.mv,
            tip: raw.tip,
            service_keys: raw.ac,
            dcr: raw.dcr,
            mor: raw.mor,
        }
    }
}

impl From<countries::CountryTranslation> for CountryTranslation {
    fn from(raw: countries::CountryTranslation) -> Self {
        Self {
            country_id: raw.ci,
            translations: raw.tr,
            image: raw.im,
            sub_translations: raw
                .sc
                .st
                .into_iter()
                .map(|sub| SubTranslation {
                    id: sub.si,
                    translations: sub.tr,
                })
                .collect(),
        }
    }
}

impl From<countries::AvailableCountries> for AvailableCountries {
    fn from(raw: countries::AvailableCountries) -> Self {
        Self {
            countries: raw.cd.into_iter().map(Country::from).collect(),
            translations: raw.cs.ct.into_iter().map(CountryTranslation::from).collect(),
            em: raw.em,
            revision: ApiRevision {
                rd: raw.api.rd,
                rdc: raw.api.rdc,
            },
        }
    }
}

impl Client {
    /// List the countries the API serves, with their translations.
    pub async fn get_countries_data(&self) -> Result<AvailableCountries, GetError> {
        let response: countries::Response = self.call(FUNCTION, &[]).await?;
        Ok(AvailableCountries::from(response.av))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{signing, testing::client_for};
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn country_code_wire_form_is_numeric() {
        assert_eq!(CountryCode::DE.to_string(), "2");
        assert_eq!(CountryCode::VN.to_string(), "239");
    }

    #[test]
    fn country_code_from_str() {
        assert_eq!("de".parse::<CountryCode>(), Ok(CountryCode::DE));
        assert_eq!("NL".parse::<CountryCode>(), Ok(CountryCode::NL));
        assert_eq!("181".parse::<CountryCode>(), Ok(CountryCode::PT));
        assert_eq!(
            "4".parse::<CountryCode>(),
            Err(ParseCountryCodeError("4".to_string()))
        );
        assert!("XX".parse::<CountryCode>().is_err());
    }

    #[test]
    fn country_code_ids_are_unique() {
        for code in CountryCode::ALL {
            assert_eq!(CountryCode::from_id(code.id()), Some(code));
        }
    }

    #[tokio::test]
    async fn get_countries_data_success() {
        // Arrange
        let server = MockServer::start_async().await;
        let response_json = json!({
            "av": {
                "cd": [
                    {
                        "cy": "DE",
                        "nm": "lieferando.de",
                        "su": "de",
                        "tw": "Deutschland",
                        "se": "info@lieferando.de",
                        "ic": "2",
                        "erp": {"pm": [1, 5]},
                        "ls": {"la": ["de", "en"]},
                        "cn": {"de": "Deutschland", "en": "Germany"},
                        "psw": null,
                        "taa": {"x": 1},
                        "mv": 10,
                        "tip": true,
                        "p1": "+49",
                        "lye": 1,
                        "lyn": null,
                        "ac": {
                            "gp": {"sid": 7, "ak": "gp-key", "pb": "pub"},
                            "nm": {"sid": 8, "ul": "https://nm.example", "ak": null},
                            "as": 1
                        },
                        "mor": "15,00"
                    }
                ],
                "cs": {
                    "ct": [
                        {
                            "ci": "2",
                            "tr": {"de": "Deutschland", "en": "Germany"},
                            "im": "de.png",
                            "sc": {"st": [{"si": "1", "tr": {"en": "Berlin"}}]}
                        }
                    ]
                },
                "em": [],
                "api": {"rd": 1, "rdc": 2}
            }
        });
        let countries_mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .x_www_form_urlencoded_tuple("var1", FUNCTION)
                    .x_www_form_urlencoded_tuple(
                        "var0",
                        signing::checksum(FUNCTION, &[], crate::constants::DEFAULT_SECRET),
                    );
                then.status(200).json_body(response_json);
            })
            .await;
        let client = client_for(&server);

        // Act
        let countries = client.get_countries_data().await;

        // Assert
        assert!(
            countries.is_ok(),
            "Failed to get countries: {:?}",
            countries.unwrap_err()
        );
        let countries = countries.unwrap();
        assert_eq!(countries.countries.len(), 1);
        assert!(!countries.translations.is_empty());
        let germany = &countries.countries[0];
        assert_eq!(germany.country_a2, "DE");
        assert_eq!(germany.languages, vec!["de", "en"]);
        assert_eq!(germany.payment_methods, vec![1, 5]);
        assert_eq!(germany.name_translations["en"], "Germany");
        assert_eq!(germany.taa, json!({"x": 1}));
        assert_eq!(germany.p1, "+49");
        assert_eq!(germany.lye, 1);
        assert_eq!(germany.lyn, "");
        assert_eq!(germany.mor, "15,00");
        assert_eq!(germany.service_keys.gp.service_id, 7);
        assert_eq!(germany.service_keys.gp.api_key, "gp-key");
        assert_eq!(germany.service_keys.nm.url, "https://nm.example");
        assert_eq!(germany.service_keys.nm.api_key, "");
        assert_eq!(germany.service_keys.active_service, 1);
        assert_eq!(countries.translations[0].sub_translations[0].id, "1");
        assert_eq!(countries.revision, ApiRevision { rd: 1, rdc: 2 });
        countries_mock.assert();
    }

    #[tokio::test]
    async fn get_countries_data_api_error() {
        // Arrange
        let server = MockServer::start_async().await;
        let countries_mock = server
            .mock_async(|when, then| {
                when.method(POST);
                then.status(200).json_body(json!({
                    "nok": {"error": {"errorid": 3, "errortext": "Wrong checksum"}}
                }));
            })
            .await;
        let client = client_for(&server);

        // Act
        let countries = client.get_countries_data().await;

        // Assert
        match countries.unwrap_err() {
            GetError::ApiError { code, message } => {
                assert_eq!(code, 3);
                assert_eq!(message, "Wrong checksum");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        countries_mock.assert();
    }
}
