//! Flat-map key localization.
//!
//! A [`LocaleTable`] translates the canonical English key names of the
//! flat map into localized display names and back. It is pure lookup:
//! values never change, unrecognized keys pass through unchanged, and an
//! unknown language code makes both directions the identity.
//!
//! The table is immutable once constructed. Additional languages are
//! registered at construction time via [`LocaleTable::with_language`];
//! share the finished table freely (`Arc` it if needed) — nothing mutates
//! it afterwards.

use std::collections::HashMap;

use crate::value::TagMap;

/// Immutable key-translation dictionary for any number of languages.
#[derive(Debug, Clone, Default)]
pub struct LocaleTable {
    languages: HashMap<String, HashMap<String, String>>,
}

impl LocaleTable {
    /// An empty table — every conversion is the identity.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in table with the `de` and `en` display names.
    pub fn builtin() -> Self {
        LocaleTable::new()
            .with_language("de", GERMAN)
            .with_language("en", ENGLISH)
    }

    /// Add (or replace) a language, consuming and returning the table so
    /// registration stays a construction-time concern.
    pub fn with_language(mut self, lang: &str, entries: &[(&str, &str)]) -> Self {
        let table = entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.languages.insert(lang.to_string(), table);
        self
    }

    /// The registered language codes.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    /// Rename every canonical key in `data` to its localized form.
    /// Values are untouched; unknown keys and unknown languages pass
    /// through unchanged.
    pub fn convert_to(&self, data: &TagMap, lang: &str) -> TagMap {
        let Some(table) = self.languages.get(lang) else {
            return data.clone();
        };

        data.iter()
            .map(|(key, value)| {
                let key = table.get(key).cloned().unwrap_or_else(|| key.clone());
                (key, value.clone())
            })
            .collect()
    }

    /// Rename every localized key in `data` back to its canonical form by
    /// reverse lookup. Keys without a reverse match pass through.
    pub fn convert_from(&self, data: &TagMap, lang: &str) -> TagMap {
        let Some(table) = self.languages.get(lang) else {
            return data.clone();
        };

        data.iter()
            .map(|(key, value)| {
                let canonical = table
                    .iter()
                    .find(|(_, localized)| *localized == key)
                    .map(|(canonical, _)| canonical.clone())
                    .unwrap_or_else(|| key.clone());
                (canonical, value.clone())
            })
            .collect()
    }
}

const GERMAN: &[(&str, &str)] = &[
    ("Image Width", "Breite"),
    ("Image Height", "Höhe"),
    ("MIME Type", "MIME-Type"),
    ("Format", "Bildformat"),
    ("Image Description", "Bildbeschreibung"),
    ("Caption-Abstract", "Abstrakte Beschreibung"),
    ("Description", "Beschreibung"),
    ("Copyright", "Copyright"),
    ("Copyright Notice", "Copyright Hinweis"),
    ("Rights", "Copyright Rechte"),
    ("URL", "Copyright URL"),
    ("Usage Terms", "Nutzungsbedingungen"),
    ("Copyright Flag", "Copyright Flag"),
    ("Keywords", "Schlüsselworte"),
    ("Subject", "Tags"),
    ("Creator", "Ersteller"),
    ("Artist", "Künstler"),
    ("By-line", "Urheber"),
    ("Authors Position", "Autor-Position"),
    ("By-line Title", "Autor-Anrede"),
    ("Creator Address", "Autor-Adresse"),
    ("Creator City", "Autor Stadt"),
    ("Creator Region", "Autor Region"),
    ("Creator Postal Code", "Autor PLZ"),
    ("Creator Country", "Autor Land"),
    ("Creator Work Telephone", "Autor Telefon"),
    ("Creator Work Email", "Autor EMail"),
    ("Creator Work URL", "Autor-Webadressen"),
    ("Location", "Bild-Standort"),
    ("Sub-location", "Bild-Substandort"),
    ("State", "Bild-Region"),
    ("Province-State", "Bild-Bundesland/Kanton"),
    ("Country Code", "Bild-Landeskennung"),
    ("Country-Primary Location Code", "Bild-Ländercode"),
    ("City", "Bild-Stadt"),
    ("Country", "Bild-Land"),
    ("Country-Primary Location Name", "Bild-Landesname"),
    ("Intellectual Genre", "Bild-Genre"),
    ("Scene", "Bild-Szene"),
    ("Modify Date", "Änderungsdatum"),
    ("Date/Time Original", "Datum/Zeit original"),
    ("Create Date", "Erstellungszeitpunkt"),
    ("Date Created", "Zeitpunkt Erstellung"),
    ("Date/Time Created", "Erstellungs Datum/Zeit"),
    ("Digital Creation Date/Time", "Dig. Erstellungs Datum/Zeit"),
    ("Digital Creation Date", "Digit. Erstellungs Datum"),
    ("Digital Creation Time", "Digit. Erstellungs Zeit"),
    ("Instructions", "Anweisungen"),
    ("Special Instructions", "Spez. Anweisungen"),
    ("Transmission Reference", "Jobkennung"),
    ("Original Transmission Reference", "Orig. Jobkennung"),
    ("Credit", "Anbieter"),
    ("Source", "Quelle"),
    ("GPS Latitude", "GPS-Breite"),
    ("GPS Longitude", "GPS-Länge"),
    ("GPS Position", "GPS-Position"),
    ("GPS Latitude Ref", "GPS-Breiten Ref."),
    ("GPS Longitude Ref", "GPS-Längen Ref."),
    ("Object Name", "Objektname"),
    ("Label", "Label"),
    ("Title", "Titel"),
    ("Headline", "Kopfzeile"),
    ("Category", "Kategorie"),
    ("Supplemental Categories", "Zusätzliche Kategorien"),
    ("Make", "Hersteller"),
    ("Camera Model Name", "Kamera-Modell"),
    ("Exposure Time", "Belichtungszeit"),
    ("Shutter Speed Value", "Belichtungszeitwert"),
    ("Shutter Speed", "Zeit Belichtung"),
    ("F Number", "Blende"),
    ("Aperture Value", "Blendenwert"),
    ("ISO", "ISO"),
    ("Lens ID", "Objektiv"),
    ("Lens Info", "Objektivinfo"),
    ("Exposure Program", "Belichtungsprogramm"),
    ("Exposure Compensation", "Belichtungskompens."),
    ("Metering Mode", "Messmodus"),
    ("Flash", "Blitz"),
    ("Focal Length", "Brennweite"),
    ("Exposure Mode", "Belichtungsmodus"),
    ("Caption Writer", "Autor-Beschreibung"),
    ("Writer-Editor", "Verfasser"),
];

const ENGLISH: &[(&str, &str)] = &[
    ("Image Width", "Width"),
    ("Image Height", "Height"),
    ("MIME Type", "MIME-Type"),
    ("Format", "Image format"),
    ("Image Description", "Image description"),
    ("Caption-Abstract", "Abstract Caption"),
    ("Description", "Description"),
    ("Copyright", "Copyright"),
    ("Copyright Notice", "Copyright notice"),
    ("Rights", "Copyright Rights"),
    ("URL", "Copyright URL"),
    ("Usage Terms", "Usage terms"),
    ("Copyright Flag", "Copyright flag"),
    ("Keywords", "Keywords"),
    ("Subject", "Tags"),
    ("Creator", "Creator"),
    ("Artist", "Artist"),
    ("By-line", "Author"),
    ("Authors Position", "Author position"),
    ("By-line Title", "Author title"),
    ("Creator Address", "Creator address"),
    ("Creator City", "Creator city"),
    ("Creator Region", "Creator region"),
    ("Creator Postal Code", "Creator postal code"),
    ("Creator Country", "Creator country"),
    ("Creator Work Telephone", "Creator telephone"),
    ("Creator Work Email", "Creator e-mail"),
    ("Creator Work URL", "Creator URL"),
    ("Location", "Location"),
    ("Sub-location", "Sub location"),
    ("State", "State"),
    ("Province-State", "Province state"),
    ("Country Code", "Country code"),
    ("Country-Primary Location Code", "Country primary location code"),
    ("City", "City"),
    ("Country", "Country"),
    ("Country-Primary Location Name", "Country primary location name"),
    ("Intellectual Genre", "Genre"),
    ("Scene", "Scene"),
    ("Modify Date", "Modify date"),
    ("Date/Time Original", "Date/Time original"),
    ("Create Date", "Create date"),
    ("Date Created", "Date created"),
    ("Date/Time Created", "Date/Time created"),
    ("Digital Creation Date/Time", "Dig. creation Date/Time"),
    ("Digital Creation Date", "Dig. creation Date"),
    ("Digital Creation Time", "Dig. creation Time"),
    ("Instructions", "Instructions"),
    ("Special Instructions", "Special Instructions"),
    ("Transmission Reference", "Job reference"),
    ("Original Transmission Reference", "Orig. job reference"),
    ("Credit", "Credit"),
    ("Source", "Source"),
    ("GPS Latitude", "Latitude"),
    ("GPS Longitude", "Longitude"),
    ("GPS Position", "GPS-Position"),
    ("GPS Latitude Ref", "Latitude Ref."),
    ("GPS Longitude Ref", "Longitude Ref."),
    ("Object Name", "Object name"),
    ("Label", "Label"),
    ("Title", "Title"),
    ("Headline", "Headline"),
    ("Category", "Category"),
    ("Supplemental Categories", "Supplemental categories"),
    ("Make", "Camera make"),
    ("Camera Model Name", "Camera model"),
    ("Exposure Time", "Exposure time"),
    ("Shutter Speed Value", "Shutter speed value"),
    ("Shutter Speed", "Shutter Speed"),
    ("F Number", "Aperture number"),
    ("Aperture Value", "Aperture value"),
    ("ISO", "ISO"),
    ("Lens ID", "Lens ID"),
    ("Lens Info", "Lens info"),
    ("Exposure Program", "Exposure program"),
    ("Exposure Compensation", "Exposure compensation"),
    ("Metering Mode", "Metering mode"),
    ("Flash", "Flash"),
    ("Focal Length", "Focal length"),
    ("Exposure Mode", "Exposure mode"),
    ("Caption Writer", "Caption writer"),
    ("Writer-Editor", "Writer-Editor"),
];
