// SPDX-License-Identifier: AGPL-3.0
// Wanderlist Core - Reference catalog
//
// Static, read-only lists of beaches and mountain treks. Nothing here is
// persisted; list order is the display order.

use crate::types::{Category, DestinationKey, IndianState, Region};

/// A catalog entry. Beaches and mountains share this shape; only mountains
/// carry an altitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Destination {
    pub id: &'static str,
    pub name: &'static str,
    pub state: IndianState,
    pub region: Region,
    pub category: Category,
    /// Display string such as "3,810m"
    pub altitude: Option<&'static str>,
}

impl Destination {
    pub fn key(&self) -> DestinationKey {
        DestinationKey::new(self.category, self.id)
    }
}

const fn beach(
    id: &'static str,
    name: &'static str,
    state: IndianState,
    region: Region,
) -> Destination {
    Destination {
        id,
        name,
        state,
        region,
        category: Category::Beach,
        altitude: None,
    }
}

const fn mountain(
    id: &'static str,
    name: &'static str,
    state: IndianState,
    region: Region,
    altitude: &'static str,
) -> Destination {
    Destination {
        id,
        name,
        state,
        region,
        category: Category::Mountain,
        altitude: Some(altitude),
    }
}

use IndianState::*;
use Region::*;

pub static BEACHES: [Destination; 50] = [
    beach("b1", "Dwarka Beach", Gujarat, WesternCoast),
    beach("b2", "Mandvi Beach", Gujarat, WesternCoast),
    beach("b3", "Somnath Beach", Gujarat, WesternCoast),
    beach("b4", "Diu Beach", Gujarat, WesternCoast),
    beach("b5", "Juhu Beach", Maharashtra, WesternCoast),
    beach("b6", "Marine Drive", Maharashtra, WesternCoast),
    beach("b7", "Alibaug Beach", Maharashtra, WesternCoast),
    beach("b8", "Ganpatipule Beach", Maharashtra, WesternCoast),
    beach("b9", "Tarkarli Beach", Maharashtra, WesternCoast),
    beach("b10", "Baga Beach", Goa, WesternCoast),
    beach("b11", "Calangute Beach", Goa, WesternCoast),
    beach("b12", "Anjuna Beach", Goa, WesternCoast),
    beach("b13", "Palolem Beach", Goa, WesternCoast),
    beach("b14", "Vagator Beach", Goa, WesternCoast),
    beach("b15", "Candolim Beach", Goa, WesternCoast),
    beach("b16", "Arambol Beach", Goa, WesternCoast),
    beach("b17", "Morjim Beach", Goa, WesternCoast),
    beach("b18", "Colva Beach", Goa, WesternCoast),
    beach("b19", "Gokarna Beach", Karnataka, WesternCoast),
    beach("b20", "Om Beach", Karnataka, WesternCoast),
    beach("b21", "Kudle Beach", Karnataka, WesternCoast),
    beach("b22", "Kaup Beach", Karnataka, WesternCoast),
    beach("b23", "Malpe Beach", Karnataka, WesternCoast),
    beach("b24", "Murudeshwar Beach", Karnataka, WesternCoast),
    beach("b25", "Kovalam Beach", Kerala, WesternCoast),
    beach("b26", "Varkala Beach", Kerala, WesternCoast),
    beach("b27", "Alleppey Beach", Kerala, WesternCoast),
    beach("b28", "Marari Beach", Kerala, WesternCoast),
    beach("b29", "Cherai Beach", Kerala, WesternCoast),
    beach("b30", "Bekal Beach", Kerala, WesternCoast),
    beach("b31", "Marina Beach", TamilNadu, EasternCoast),
    beach("b32", "Elliot's Beach", TamilNadu, EasternCoast),
    beach("b33", "Mahabalipuram Beach", TamilNadu, EasternCoast),
    beach("b34", "Kanyakumari Beach", TamilNadu, EasternCoast),
    beach("b35", "Rameswaram Beach", TamilNadu, EasternCoast),
    beach("b36", "Pondicherry Beach", TamilNadu, EasternCoast),
    beach("b37", "Promenade Beach", TamilNadu, EasternCoast),
    beach("b38", "Visakhapatnam Beach", AndhraPradesh, EasternCoast),
    beach("b39", "Rushikonda Beach", AndhraPradesh, EasternCoast),
    beach("b40", "Yarada Beach", AndhraPradesh, EasternCoast),
    beach("b41", "Bheemunipatnam Beach", AndhraPradesh, EasternCoast),
    beach("b42", "Puri Beach", Odisha, EasternCoast),
    beach("b43", "Chandipur Beach", Odisha, EasternCoast),
    beach("b44", "Gopalpur Beach", Odisha, EasternCoast),
    beach("b45", "Konark Beach", Odisha, EasternCoast),
    beach("b46", "Digha Beach", WestBengal, EasternCoast),
    beach("b47", "Mandarmani Beach", WestBengal, EasternCoast),
    beach("b48", "Bakkhali Beach", WestBengal, EasternCoast),
    beach("b49", "Shankarpur Beach", WestBengal, EasternCoast),
    beach("b50", "Tajpur Beach", WestBengal, EasternCoast),
];

pub static MOUNTAINS: [Destination; 70] = [
    mountain("m1", "Kedarkantha Trek", Uttarakhand, Himalayas, "3,810m"),
    mountain("m2", "Roopkund Trek", Uttarakhand, Himalayas, "4,800m"),
    mountain("m3", "Valley of Flowers", Uttarakhand, Himalayas, "3,658m"),
    mountain("m4", "Har Ki Dun Trek", Uttarakhand, Himalayas, "3,566m"),
    mountain("m5", "Brahmatal Trek", Uttarakhand, Himalayas, "3,475m"),
    mountain("m6", "Kuari Pass Trek", Uttarakhand, Himalayas, "3,876m"),
    mountain("m7", "Chopta Tungnath", Uttarakhand, Himalayas, "3,680m"),
    mountain("m8", "Deoriatal Chandrashila", Uttarakhand, Himalayas, "4,000m"),
    mountain("m9", "Dayara Bugyal", Uttarakhand, Himalayas, "3,408m"),
    mountain("m10", "Nag Tibba Trek", Uttarakhand, Himalayas, "3,022m"),
    mountain("m11", "Triund Trek", HimachalPradesh, Himalayas, "2,850m"),
    mountain("m12", "Kheerganga Trek", HimachalPradesh, Himalayas, "2,960m"),
    mountain("m13", "Hampta Pass Trek", HimachalPradesh, Himalayas, "4,270m"),
    mountain("m14", "Bhrigu Lake Trek", HimachalPradesh, Himalayas, "4,300m"),
    mountain("m15", "Prashar Lake Trek", HimachalPradesh, Himalayas, "2,730m"),
    mountain("m16", "Indrahar Pass Trek", HimachalPradesh, Himalayas, "4,342m"),
    mountain("m17", "Pin Parvati Pass", HimachalPradesh, Himalayas, "5,319m"),
    mountain("m18", "Beas Kund Trek", HimachalPradesh, Himalayas, "3,700m"),
    mountain("m19", "Chandrakhani Pass", HimachalPradesh, Himalayas, "3,660m"),
    mountain("m20", "Sar Pass Trek", HimachalPradesh, Himalayas, "4,200m"),
    mountain("m21", "Kashmir Great Lakes", JammuKashmir, Himalayas, "4,100m"),
    mountain("m22", "Tarsar Marsar Trek", JammuKashmir, Himalayas, "3,900m"),
    mountain("m23", "Kolahoi Glacier Trek", JammuKashmir, Himalayas, "3,900m"),
    mountain("m24", "Gangbal Lake Trek", JammuKashmir, Himalayas, "3,570m"),
    mountain("m25", "Sinthan Top", JammuKashmir, Himalayas, "3,748m"),
    mountain("m26", "Goecha La Trek", Sikkim, Himalayas, "4,940m"),
    mountain("m27", "Sandakphu Trek", Sikkim, Himalayas, "3,636m"),
    mountain("m28", "Dzongri Trek", Sikkim, Himalayas, "4,020m"),
    mountain("m29", "Singalila Ridge Trek", Sikkim, Himalayas, "3,636m"),
    mountain("m30", "Tawang Monastery Trek", ArunachalPradesh, Himalayas, "3,048m"),
    mountain("m31", "Mechuka Valley Trek", ArunachalPradesh, Himalayas, "1,829m"),
    mountain("m32", "Bailey Trail", ArunachalPradesh, Himalayas, "4,000m"),
    mountain("m33", "Living Root Bridges Trek", Meghalaya, NorthIndia, "500m"),
    mountain("m34", "David Scott Trail", Meghalaya, NorthIndia, "1,200m"),
    mountain("m35", "Mawphlang Sacred Forest", Meghalaya, NorthIndia, "1,680m"),
    mountain("m36", "Kalsubai Peak", Maharashtra, WesternGhats, "1,646m"),
    mountain("m37", "Harishchandragad Trek", Maharashtra, WesternGhats, "1,424m"),
    mountain("m38", "Rajmachi Trek", Maharashtra, WesternGhats, "884m"),
    mountain("m39", "Lohagad Trek", Maharashtra, WesternGhats, "1,033m"),
    mountain("m40", "Torna Fort Trek", Maharashtra, WesternGhats, "1,403m"),
    mountain("m41", "Visapur Fort Trek", Maharashtra, WesternGhats, "1,084m"),
    mountain("m42", "Sinhagad Fort Trek", Maharashtra, WesternGhats, "1,312m"),
    mountain("m43", "Ratangad Trek", Maharashtra, WesternGhats, "1,297m"),
    mountain("m44", "Naneghat Trek", Maharashtra, WesternGhats, "830m"),
    mountain("m45", "Korigad Trek", Maharashtra, WesternGhats, "929m"),
    mountain("m46", "Mullayanagiri Trek", Karnataka, WesternGhats, "1,930m"),
    mountain("m47", "Kudremukh Trek", Karnataka, WesternGhats, "1,894m"),
    mountain("m48", "Tadiandamol Trek", Karnataka, WesternGhats, "1,748m"),
    mountain("m49", "Kumara Parvatha Trek", Karnataka, WesternGhats, "1,712m"),
    mountain("m50", "Nandi Hills Trek", Karnataka, WesternGhats, "1,478m"),
    mountain("m51", "Skandagiri Trek", Karnataka, WesternGhats, "1,450m"),
    mountain("m52", "Brahmagiri Trek", Karnataka, WesternGhats, "1,608m"),
    mountain("m53", "Chembra Peak Trek", Kerala, WesternGhats, "2,100m"),
    mountain("m54", "Anamudi Peak Trek", Kerala, WesternGhats, "2,695m"),
    mountain("m55", "Meesapulimala Trek", Kerala, WesternGhats, "2,640m"),
    mountain("m56", "Agasthyakoodam Trek", Kerala, WesternGhats, "1,868m"),
    mountain("m57", "Doddabetta Peak", TamilNadu, EasternGhats, "2,637m"),
    mountain("m58", "Kolli Hills Trek", TamilNadu, EasternGhats, "1,300m"),
    mountain("m59", "Javadi Hills Trek", TamilNadu, EasternGhats, "1,140m"),
    mountain("m60", "Yelagiri Hills Trek", TamilNadu, EasternGhats, "1,410m"),
    mountain("m61", "Araku Valley Trek", AndhraPradesh, EasternGhats, "1,350m"),
    mountain("m62", "Horsley Hills Trek", AndhraPradesh, EasternGhats, "1,265m"),
    mountain("m63", "Tirumala Hills Trek", AndhraPradesh, EasternGhats, "853m"),
    mountain("m64", "Deomali Peak", Odisha, EasternGhats, "1,672m"),
    mountain("m65", "Mahendragiri Trek", Odisha, EasternGhats, "1,501m"),
    mountain("m66", "Mount Abu Trek", Rajasthan, NorthIndia, "1,722m"),
    mountain("m67", "Guru Shikhar Trek", Rajasthan, NorthIndia, "1,722m"),
    mountain("m68", "Pachmarhi Trek", MadhyaPradesh, NorthIndia, "1,067m"),
    mountain("m69", "Dhupgarh Peak", MadhyaPradesh, NorthIndia, "1,350m"),
    mountain("m70", "Saptura Range Trek", MadhyaPradesh, NorthIndia, "1,180m"),
];

pub const BEACH_REGIONS: [Region; 2] = [WesternCoast, EasternCoast];

pub const BEACH_STATES: [IndianState; 9] = [
    Gujarat,
    Maharashtra,
    Goa,
    Karnataka,
    Kerala,
    TamilNadu,
    AndhraPradesh,
    Odisha,
    WestBengal,
];

pub const MOUNTAIN_REGIONS: [Region; 4] = [Himalayas, WesternGhats, EasternGhats, NorthIndia];

pub const MOUNTAIN_STATES: [IndianState; 14] = [
    Uttarakhand,
    HimachalPradesh,
    JammuKashmir,
    Sikkim,
    ArunachalPradesh,
    Meghalaya,
    Maharashtra,
    Karnataka,
    Kerala,
    TamilNadu,
    AndhraPradesh,
    Odisha,
    Rajasthan,
    MadhyaPradesh,
];

/// Full catalog for a category
pub fn destinations(category: Category) -> &'static [Destination] {
    match category {
        Category::Beach => &BEACHES,
        Category::Mountain => &MOUNTAINS,
    }
}

/// Regions offered as filters for a category
pub fn regions(category: Category) -> &'static [Region] {
    match category {
        Category::Beach => &BEACH_REGIONS,
        Category::Mountain => &MOUNTAIN_REGIONS,
    }
}

/// States offered as filters for a category
pub fn states(category: Category) -> &'static [IndianState] {
    match category {
        Category::Beach => &BEACH_STATES,
        Category::Mountain => &MOUNTAIN_STATES,
    }
}

pub fn find(category: Category, id: &str) -> Option<&'static Destination> {
    destinations(category).iter().find(|d| d.id == id)
}

pub fn find_by_key(key: &DestinationKey) -> Option<&'static Destination> {
    find(key.category, &key.id)
}
