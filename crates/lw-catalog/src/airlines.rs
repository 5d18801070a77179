// The airline table.
//
// Format: (ICAO, IATA, display name). Grouped by region, ordered roughly by
// global passenger volume within each group. Add new airlines here; the
// build tool and the device pick them up automatically.

use crate::AirlineEntry;

macro_rules! airline {
    ($icao:literal, $iata:literal, $name:literal) => {
        AirlineEntry {
            icao: $icao,
            iata: $iata,
            name: $name,
        }
    };
}

pub const AIRLINES: &[AirlineEntry] = &[
    // United States
    airline!("AAL", "AA", "American Airlines"),
    airline!("DAL", "DL", "Delta Air Lines"),
    airline!("UAL", "UA", "United Airlines"),
    airline!("SWA", "WN", "Southwest Airlines"),
    airline!("ASA", "AS", "Alaska Airlines"),
    airline!("JBU", "B6", "JetBlue Airways"),
    airline!("SKW", "OO", "SkyWest Airlines"),
    airline!("FFT", "F9", "Frontier Airlines"),
    airline!("NKS", "NK", "Spirit Airlines"),
    airline!("HAL", "HA", "Hawaiian Airlines"),
    airline!("SUN", "SY", "Sun Country Airlines"),
    airline!("GTI", "GS", "Atlas Air"),
    airline!("ABX", "GB", "ABX Air"),
    airline!("FDX", "FX", "FedEx Express"),
    airline!("UPS", "5X", "UPS Airlines"),
    // Canada
    airline!("ACA", "AC", "Air Canada"),
    airline!("WJA", "WS", "WestJet"),
    airline!("TTS", "TS", "Air Transat"),
    // Europe
    airline!("RYR", "FR", "Ryanair"),
    airline!("EZY", "U2", "easyJet"),
    airline!("DLH", "LH", "Lufthansa"),
    airline!("BAW", "BA", "British Airways"),
    airline!("AFR", "AF", "Air France"),
    airline!("KLM", "KL", "KLM Royal Dutch"),
    airline!("IBE", "IB", "Iberia"),
    airline!("VLG", "VY", "Vueling"),
    airline!("NAX", "DY", "Norwegian"),
    airline!("SAS", "SK", "Scandinavian Airlines"),
    airline!("AZA", "AZ", "ITA Airways"),
    airline!("TAP", "TP", "TAP Air Portugal"),
    airline!("AUA", "OS", "Austrian Airlines"),
    airline!("SWR", "LX", "Swiss International"),
    airline!("BEL", "SN", "Brussels Airlines"),
    airline!("THY", "TK", "Turkish Airlines"),
    airline!("WZZ", "W6", "Wizz Air"),
    airline!("TOM", "BY", "TUI Airways"),
    airline!("AEE", "A3", "Aegean Airlines"),
    airline!("LOT", "LO", "LOT Polish Airlines"),
    airline!("CSA", "OK", "Czech Airlines"),
    airline!("FIN", "AY", "Finnair"),
    airline!("ICE", "FI", "Icelandair"),
    airline!("UAE", "EK", "Emirates"),
    airline!("ETD", "EY", "Etihad Airways"),
    airline!("QTR", "QR", "Qatar Airways"),
    // Asia-Pacific
    airline!("CCA", "CA", "Air China"),
    airline!("CSN", "CZ", "China Southern"),
    airline!("CES", "MU", "China Eastern"),
    airline!("CHH", "HU", "Hainan Airlines"),
    airline!("XAM", "MF", "Xiamen Airlines"),
    airline!("SHQ", "SC", "Shandong Airlines"),
    airline!("CXA", "KN", "China United Airlines"),
    airline!("JAL", "JL", "Japan Airlines"),
    airline!("ANA", "NH", "All Nippon Airways"),
    airline!("JJP", "GK", "Jetstar Japan"),
    airline!("KAL", "KE", "Korean Air"),
    airline!("AAR", "OZ", "Asiana Airlines"),
    airline!("SIA", "SQ", "Singapore Airlines"),
    airline!("SLK", "MI", "SilkAir"),
    airline!("TGW", "TR", "Scoot"),
    airline!("MAS", "MH", "Malaysia Airlines"),
    airline!("AXM", "D7", "AirAsia X"),
    airline!("AIQ", "QZ", "AirAsia"),
    airline!("IAW", "BI", "Royal Brunei"),
    airline!("THA", "TG", "Thai Airways"),
    airline!("TVJ", "VZ", "Thai Vietjet"),
    airline!("GAR", "GA", "Garuda Indonesia"),
    airline!("LNI", "JT", "Lion Air"),
    airline!("BTK", "ID", "Batik Air"),
    airline!("VJC", "VJ", "Vietjet Air"),
    airline!("HVN", "VN", "Vietnam Airlines"),
    airline!("PAL", "PR", "Philippine Airlines"),
    airline!("CEB", "5J", "Cebu Pacific"),
    airline!("QFA", "QF", "Qantas"),
    airline!("JST", "JQ", "Jetstar"),
    airline!("VOZ", "VA", "Virgin Australia"),
    airline!("ANZ", "NZ", "Air New Zealand"),
    airline!("AIX", "IX", "Air India Express"),
    airline!("AIC", "AI", "Air India"),
    airline!("IGO", "6E", "IndiGo"),
    airline!("SEJ", "SG", "SpiceJet"),
    // Middle East & Africa
    airline!("SVA", "SV", "Saudia"),
    airline!("FDB", "FZ", "flydubai"),
    airline!("ABY", "G9", "Air Arabia"),
    airline!("OAL", "OA", "Olympic Air"),
    airline!("MSR", "MS", "EgyptAir"),
    airline!("ETH", "ET", "Ethiopian Airlines"),
    airline!("KQA", "KQ", "Kenya Airways"),
    airline!("SAA", "SA", "South African Airways"),
    // Latin America
    airline!("LAN", "LA", "LATAM Airlines"),
    airline!("TAM", "JJ", "LATAM Brasil"),
    airline!("GLO", "G3", "Gol Linhas Aereas"),
    airline!("AZU", "AD", "Azul Brazilian"),
    airline!("AVA", "AV", "Avianca"),
    airline!("VOI", "Y4", "Volaris"),
    airline!("AMX", "AM", "Aeromexico"),
    airline!("VIV", "VB", "VivaAerobus"),
    // Russia / CIS
    airline!("AFL", "SU", "Aeroflot"),
    airline!("SDM", "FV", "Rossiya Airlines"),
    airline!("SVP", "UT", "UTair"),
];
