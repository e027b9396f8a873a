//! Compiled-in scheme and advisory catalogue.

use crate::models::{KnowledgeEntry, Language};

use Language::{En, Hi, Mr};

struct Seed {
    id: &'static str,
    title: &'static str,
    summary: &'static str,
    details: &'static str,
    source: &'static str,
    url: Option<&'static str>,
    updated: &'static str,
    tags: &'static [&'static str],
    regions: &'static [&'static str],
    languages: &'static [Language],
}

impl Seed {
    fn to_entry(&self) -> KnowledgeEntry {
        KnowledgeEntry {
            id: self.id.to_string(),
            title: self.title.to_string(),
            summary: self.summary.to_string(),
            details: self.details.to_string(),
            source: self.source.to_string(),
            url: self.url.map(str::to_string),
            updated: self.updated.to_string(),
            tags: self.tags.iter().map(|t| t.to_string()).collect(),
            regions: self.regions.iter().map(|r| r.to_string()).collect(),
            languages: self.languages.to_vec(),
        }
    }
}

pub(super) fn entries() -> Vec<KnowledgeEntry> {
    SEED.iter().map(Seed::to_entry).collect()
}

const SEED: &[Seed] = &[
    Seed {
        id: "pm-kisan-income-support",
        title: "PM-KISAN Income Support / पीएम किसान सन्मान निधी",
        summary: "Direct income support of Rs 6,000 per year to landholding farmer families across India, paid in three instalments.",
        details: "Eligible farmer families receive Rs 2,000 every four months by direct benefit transfer to an Aadhaar-seeded bank account. \
Registration is through the PM-KISAN portal, the Common Service Centre, or the village revenue officer. \
e-KYC is mandatory before each instalment is released. Institutional landholders, income tax payers and serving government employees are excluded. \
शेतकरी कुटुंबाला वर्षाला ६,००० रुपये तीन हप्त्यांमध्ये बँक खात्यात जमा होतात.",
        source: "Ministry of Agriculture & Farmers Welfare, Government of India",
        url: Some("https://pmkisan.gov.in"),
        updated: "2024-11-15",
        tags: &["pm-kisan", "income", "dbt", "ekyc", "kisan"],
        regions: &["India"],
        languages: &[En, Hi, Mr],
    },
    Seed {
        id: "crop-insurance-pmfby",
        title: "Pradhan Mantri Fasal Bima Yojana (PMFBY)",
        summary: "Crop insurance against yield loss from drought, flood, pests and disease, with low farmer premium for kharif and rabi seasons.",
        details: "Farmer premium is capped at 2% of the sum insured for kharif food and oilseed crops, 1.5% for rabi crops, and 5% for commercial and horticultural crops. \
Loanee farmers are enrolled through their bank unless they opt out; non-loanee farmers can enrol through the crop insurance portal or a Common Service Centre before the seasonal cut-off date. \
Localized calamities such as hailstorm or inundation and post-harvest losses must be reported within 72 hours. \
फसल बीमा के लिए खरीफ और रबी मौसम की अंतिम तिथि से पहले आवेदन करें।",
        source: "Ministry of Agriculture & Farmers Welfare, Government of India",
        url: Some("https://pmfby.gov.in"),
        updated: "2024-06-20",
        tags: &["pmfby", "insurance", "crop-loss", "kharif", "rabi", "bima"],
        regions: &["India"],
        languages: &[En, Hi, Mr],
    },
    Seed {
        id: "soil-health-card",
        title: "Soil Health Card Scheme / मृदा आरोग्य पत्रिका",
        summary: "Free soil testing every two years with a card listing nutrient status and crop-wise fertilizer recommendations.",
        details: "Soil samples are collected on a grid basis and tested for pH, electrical conductivity, organic carbon, nitrogen, phosphorus, potassium, sulphur and micronutrients such as zinc, iron, copper, manganese and boron. \
The card recommends fertilizer doses and soil amendments for each crop so that farmers avoid overuse of urea and correct deficiencies. \
माती परीक्षण करून खत वापराचा सल्ला मिळतो.",
        source: "Department of Agriculture & Farmers Welfare, Government of India",
        url: Some("https://soilhealth.dac.gov.in"),
        updated: "2024-03-10",
        tags: &["soil", "testing", "npk", "nutrients", "fertilizer"],
        regions: &["India"],
        languages: &[En, Hi, Mr],
    },
    Seed {
        id: "kisan-credit-card",
        title: "Kisan Credit Card (KCC)",
        summary: "Short-term crop loan and working capital for cultivation, animal husbandry and fisheries at concessional interest.",
        details: "Loans up to Rs 3 lakh carry 7% interest with an additional 3% prompt repayment incentive, bringing the effective rate to 4%. \
Collateral-free limit is Rs 1.6 lakh. The card covers seeds, fertilizer, pesticide, harvest expenses and post-harvest needs, and is renewed annually. \
Apply at any commercial, regional rural or cooperative bank with land records and identity proof. \
किसान क्रेडिट कार्ड से कम ब्याज पर ऋण मिलता है।",
        source: "Reserve Bank of India / NABARD",
        url: Some("https://www.myscheme.gov.in/schemes/kcc"),
        updated: "2024-02-01",
        tags: &["kcc", "credit", "loan", "interest"],
        regions: &["India"],
        languages: &[En, Hi],
    },
    Seed {
        id: "pmksy-micro-irrigation",
        title: "Per Drop More Crop (PMKSY Micro Irrigation)",
        summary: "Subsidy for drip and sprinkler irrigation systems to save water and raise yields.",
        details: "Small and marginal farmers receive 55% assistance and other farmers 45% of the unit cost of drip or sprinkler sets; several states add a top-up. \
Applications go through the state horticulture or agriculture department portal and systems must be installed by a registered supplier. \
Fertigation through drip lines reduces fertilizer loss and is recommended for sugarcane, banana, cotton and vegetables. \
ठिबक आणि तुषार सिंचनासाठी अनुदान उपलब्ध आहे.",
        source: "Ministry of Agriculture & Farmers Welfare, Government of India",
        url: Some("https://pmksy.gov.in"),
        updated: "2024-04-18",
        tags: &["irrigation", "drip", "sprinkler", "subsidy", "water"],
        regions: &["India", "Maharashtra"],
        languages: &[En, Hi, Mr],
    },
    Seed {
        id: "pm-kusum-solar-pumps",
        title: "PM-KUSUM Solar Pumps",
        summary: "Financial assistance for standalone solar agricultural pumps and solarisation of grid-connected pumps.",
        details: "Central and state governments together provide up to 60% of the pump cost and the farmer contributes 10%, with the balance available as bank loan. \
Farmers can also install solar plants on barren land and sell surplus power to the distribution company. \
Pump capacity ranges from 3 HP to 7.5 HP depending on landholding and water source.",
        source: "Ministry of New and Renewable Energy, Government of India",
        url: Some("https://pmkusum.mnre.gov.in"),
        updated: "2023-12-05",
        tags: &["solar", "pump", "kusum", "energy"],
        regions: &["India"],
        languages: &[En, Hi],
    },
    Seed {
        id: "maharashtra-pocra",
        title: "Nanaji Deshmukh Krishi Sanjivani Prakalp (PoCRA)",
        summary: "Climate-resilient agriculture project for drought-prone villages of Marathwada and Vidarbha in Maharashtra.",
        details: "The project funds farm ponds, protective irrigation, seed production, soil and water conservation, and farmer producer companies in selected villages. \
Individual farmers apply through the project portal and benefits are paid by direct transfer after field verification. \
दुष्काळग्रस्त गावांमध्ये शेततळे, बियाणे आणि पाणी व्यवस्थापनासाठी अनुदान दिले जाते.",
        source: "Government of Maharashtra, Department of Agriculture",
        url: Some("https://mahapocra.gov.in"),
        updated: "2024-01-22",
        tags: &["pocra", "climate", "drought", "maharashtra"],
        regions: &["Maharashtra", "Marathwada", "Vidarbha"],
        languages: &[Mr, En],
    },
    Seed {
        id: "maharashtra-crop-loan-waiver",
        title: "Mahatma Jyotirao Phule Shetkari Karjmukti Yojana",
        summary: "Crop loan waiver for eligible farmers in Maharashtra with outstanding short-term crop loans.",
        details: "Outstanding crop loans up to Rs 2 lakh taken from cooperative, commercial and rural banks are waived after Aadhaar authentication. \
Farmers who repaid regularly are eligible for an incentive grant instead. \
कर्जमुक्ती योजनेसाठी आधार प्रमाणीकरण आवश्यक आहे.",
        source: "Government of Maharashtra, Cooperation Department",
        url: None,
        updated: "2023-08-30",
        tags: &["loan-waiver", "karjmukti", "maharashtra", "debt"],
        regions: &["Maharashtra"],
        languages: &[Mr, En],
    },
    Seed {
        id: "balanced-fertilizer-advisory",
        title: "Balanced Fertilizer Use and Neem-Coated Urea",
        summary: "Advisory on splitting nitrogen doses, pairing urea with phosphorus and potassium, and using organic manure.",
        details: "Apply nitrogen in two or three splits matched to crop stage instead of a single basal dose. \
Neem-coated urea releases nitrogen slowly and reduces leaching. Combine DAP or SSP for phosphorus and MOP for potassium according to the soil test. \
Add farmyard manure or vermicompost to build organic carbon. Nano urea can replace one top dressing in cereals. \
उर्वरक का संतुलित उपयोग मिट्टी परीक्षण के अनुसार करें।",
        source: "Indian Council of Agricultural Research / Department of Fertilizers",
        url: None,
        updated: "2024-05-12",
        tags: &["fertilizer", "urea", "dap", "nitrogen", "manure"],
        regions: &["India"],
        languages: &[En, Hi],
    },
    Seed {
        id: "e-nam-market-access",
        title: "e-NAM National Agriculture Market",
        summary: "Online trading platform linking regulated mandis so farmers can sell produce at transparent prices.",
        details: "Farmers register with the local APMC, bring produce for quality assaying, and receive bids from traders across linked mandis. \
Payment is made online to the farmer's bank account. Farmer producer organisations can trade directly from their collection centres.",
        source: "Small Farmers' Agribusiness Consortium, Government of India",
        url: Some("https://enam.gov.in"),
        updated: "2023-10-09",
        tags: &["enam", "market", "mandi", "price"],
        regions: &["India"],
        languages: &[En, Hi],
    },
];
