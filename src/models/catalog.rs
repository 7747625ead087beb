//! Static catalog of motorcycle brands and their common models, alphabetical
//! by brand. Drives the brand and model selects on the submission form.

pub const BIKE_CATALOG: &[(&str, &[&str])] = &[
    (
        "Aprilia",
        &[
            "RS 660",
            "Tuono 660",
            "Tuono V4",
            "RSV4",
            "Shiver 900",
            "Dorsoduro 900",
            "Caponord 1200",
        ],
    ),
    (
        "Bajaj",
        &[
            "Pulsar 150",
            "Pulsar NS200",
            "Pulsar RS200",
            "Dominar 400",
            "Platina 100",
            "CT 100",
            "Avenger Street 160",
            "Avenger Cruise 220",
        ],
    ),
    (
        "Benelli",
        &[
            "TNT 125",
            "TNT 300",
            "302R",
            "502C",
            "Leoncino 500",
            "TRK 502",
            "TRK 502X",
            "752S",
        ],
    ),
    ("Beta", &["RR 300", "Xtrainer 300", "Evo 250"]),
    ("Bimota", &["Tesi H2", "KB4", "DB7", "DB11"]),
    (
        "BMW",
        &[
            "G 310 R",
            "G 310 RR",
            "G 310 GS",
            "F 850 GS",
            "R 1250 GS",
            "S 1000 RR",
            "M 1000 RR",
        ],
    ),
    ("BSA", &["Gold Star 650"]),
    (
        "CFMoto",
        &["300NK", "650NK", "650MT", "650GT", "800MT", "700CL-X"],
    ),
    (
        "Ducati",
        &[
            "Monster 821",
            "Monster 1200",
            "Multistrada V4",
            "Diavel 1260",
            "XDiavel",
            "Panigale V2",
            "Panigale V4",
            "Streetfighter V4",
            "SuperSport 950",
            "Hypermotard 950",
            "Scrambler Icon",
            "Scrambler 1100",
        ],
    ),
    ("Fantic", &["Caballero 500", "Caballero 250", "Enduro 125"]),
    ("GasGas", &["EC 300", "MC 250F", "TXT Racing 300"]),
    (
        "Harley-Davidson",
        &[
            "Iron 883",
            "Forty-Eight",
            "Street Bob",
            "Fat Bob",
            "Softail Slim",
            "Road King",
            "Street Glide",
            "Electra Glide",
            "Pan America 1250",
            "LiveWire",
        ],
    ),
    (
        "Hero",
        &[
            "Splendor Plus",
            "HF Deluxe",
            "Glamour",
            "Passion Pro",
            "Xpulse 200",
            "Xtreme 160R",
            "Pleasure Plus",
            "Destini 125",
            "Maestro Edge 125",
        ],
    ),
    (
        "Honda",
        &[
            "Activa 6G",
            "Shine",
            "Unicorn",
            "SP 125",
            "Hornet 2.0",
            "CB350",
            "CB350RS",
            "CB500X",
        ],
    ),
    (
        "Husqvarna",
        &[
            "Vitpilen 250",
            "Vitpilen 401",
            "Svartpilen 250",
            "Svartpilen 401",
            "Norden 901",
            "701 Enduro",
            "701 Supermoto",
        ],
    ),
    (
        "Indian",
        &[
            "Scout",
            "Scout Bobber",
            "Chief",
            "Chieftain",
            "Springfield",
            "Roadmaster",
            "FTR 1200",
            "Challenger",
        ],
    ),
    ("Jawa", &["Jawa 42", "Jawa Perak", "Jawa Classic"]),
    (
        "Kawasaki",
        &[
            "Ninja 300",
            "Ninja 400",
            "Ninja 650",
            "Z650",
            "Versys 650",
            "Vulcan S",
            "W175",
        ],
    ),
    (
        "KTM",
        &[
            "Duke 125",
            "Duke 200",
            "Duke 390",
            "RC 125",
            "RC 200",
            "RC 390",
            "Adventure 390",
            "Adventure 250",
        ],
    ),
    ("Kymco", &["Like 150i", "X-Town 300i", "AK 550"]),
    ("Lambretta", &["V-Special 125", "V-Special 200"]),
    ("Mash", &["Seventy 125", "Black Seven 125", "X-Ride 650"]),
    (
        "Moto Guzzi",
        &[
            "V7 Stone",
            "V7 Special",
            "V9 Bobber",
            "V9 Roamer",
            "V85 TT",
            "California Touring 1400",
        ],
    ),
    (
        "MV Agusta",
        &[
            "Brutale 800",
            "Brutale 1000 RR",
            "Dragster 800 RR",
            "F3 800",
            "F4 RR",
            "Turismo Veloce 800",
        ],
    ),
    (
        "Piaggio",
        &["Liberty 125", "Medley 150", "Beverly 300", "MP3 500"],
    ),
    (
        "Royal Enfield",
        &[
            "Classic 350",
            "Bullet 350",
            "Meteor 350",
            "Continental GT 650",
            "Interceptor 650",
            "Himalayan",
            "Hunter 350",
            "Super Meteor 650",
        ],
    ),
    ("Sherco", &["SE 300", "SM 125", "TY 125"]),
    (
        "Suzuki",
        &[
            "Access 125",
            "Burgman Street",
            "Gixxer",
            "Gixxer SF",
            "Hayabusa",
            "V-Strom SX",
            "Avenis",
        ],
    ),
    ("SYM", &["Jet 14 125", "Cruisym 300", "Maxsym TL 500"]),
    (
        "Triumph",
        &[
            "Street Twin",
            "Bonneville T100",
            "Bonneville T120",
            "Speed Twin",
            "Thruxton RS",
            "Scrambler 1200",
            "Tiger 900",
            "Tiger 1200",
            "Speed Triple 1200 RS",
            "Rocket 3",
        ],
    ),
    (
        "TVS",
        &[
            "Apache RTR 160",
            "Apache RTR 200 4V",
            "Apache RR 310",
            "Jupiter",
            "XL100",
            "Ntorq 125",
            "Raider",
            "iQube Electric",
        ],
    ),
    (
        "Vespa",
        &[
            "Primavera 125",
            "Sprint 150",
            "GTS 300",
            "Sei Giorni",
            "Elettrica",
        ],
    ),
    (
        "Yamaha",
        &[
            "MT-15",
            "R15 V4",
            "FZ-S FI",
            "FZ-X",
            "Ray ZR 125",
            "Fascino 125",
            "Aerox 155",
            "YZF R3",
        ],
    ),
    (
        "Zero Motorcycles",
        &["Zero S", "Zero SR", "Zero SR/F", "Zero FX", "Zero DSR", "Zero DS"],
    ),
];

pub fn brands() -> impl Iterator<Item = &'static str> {
    BIKE_CATALOG.iter().map(|(brand, _)| *brand)
}

/// Models for a brand; empty for a brand not in the catalog.
pub fn models_for(brand: &str) -> &'static [&'static str] {
    BIKE_CATALOG
        .iter()
        .find(|(name, _)| *name == brand)
        .map(|(_, models)| *models)
        .unwrap_or(&[])
}
