//! Sample inputs for first-time use.
//!
//! Written on request when no candidate dump files exist, so the cleaner can
//! be tried end to end. The data deliberately contains the artifacts the
//! cleaner repairs: quoted SMS codes, backslash-escaped quotes, escaped
//! newlines and a mis-encoded copyright sign.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const ADDONS_SAMPLE_FILE: &str = "mysql_addons_data.txt";
pub const BIO_SAMPLE_FILE: &str = "mysql_bio_data.txt";

/// Two CombinedAddons rows as a bare values block.
pub const ADDONS_SAMPLE: &str = r#"(1, '67c7dc0a1f208d60dd031cc2-CCTV Video Analytics Add-On-4', 'Each analytic report add-on includes features like People Count, Heat Maps, and more.', 49, 'Per analytic report', 'No', 'Monthly', 'eand', 'Analytics add-on: Video Analytics, People Count, Heat Maps, Demographics', 'No', 'No', '2025-03-05 05:07:22', 'CCTV Video Analytics Add-On', 188, 'No', 'business', 'https://www.etisalat.ae/en/smb/products/digital-products/cctv/cctv-cloud-connectivity-4-cameras.html', 'True', 'False', 5, '5% VAT excluded', NULL, NULL, NULL, NULL, NULL, NULL, NULL, NULL, NULL, NULL, NULL),
(6, '67c7d1f81f208d60dd022e8d-Takaful Personal Accident Cover - AED 100,000-2', 'To subscribe, text 'T100' to 1012.', 6, 'Monthly fee. VAT excluded.', 'No', 'Monthly', 'eand', 'Accidental life coverage at AED 5.5/month.', 'No', 'No', '2025-03-05 04:24:24', 'Takaful Personal Accident Cover - AED 100,000', 188, 'No', 'consumer', 'https://www.etisalat.ae/en/c/promotions/takaful-offer.html', 'True', 'False', 5, '5% VAT excluded.', '30 Days', 'AED 100,000', 'In the event of death by accident or Permanent Total Disablement (PTD) due to an accident.', 'The cover is valid for 30 days during the policy year for which contribution is paid.', NULL, NULL, NULL, NULL, NULL, NULL, NULL)"#;

/// Three CombinedBio rows as a bare values block.
pub const BIO_SAMPLE: &str = r#"(1, '67c7c0d01f208d60dd0098b0', 'Through our B2B portal, you can choose to pay fully or partially one or more bills by cheque. You can view and download your bill, generate a B2B reference number, and use it when depositing your cheque at any Etisalat Smart Service Machine. Access the B2B portal for easy bill management and payment.', 'eand', '2025-03-05 03:11:12', 188, 'business', 'https://www.etisalat.ae/en/smb/billing-and-payment/quick-and-easy-cheque-payment.html'),
(2, '67c7c0da1f208d60dd0099a3', 'Our mission at e& enterprise is to enable organizations to maximize their digital potential by being a partner in the digital shift through advanced technology and expert guidance. Our values focus on ambition, passion, people, and togetherness, driving us to exceed customer expectations and build collaborative ecosystems. Our strategy centers on digital transformation, with a focus on empowering businesses with cutting-edge technologies while prioritizing people. We aim to make a regional impact from Egypt to Oman in digital change. Our senior leadership guides us to success, spotting opportunities and keeping us on track. CEO Khalid Murshed emphasizes the extraordinary opportunities in the digital landscape driven by innovation. Our story began in 1976 as Etisalat, the UAE\'s first telephone company, growing into the largest telco in the region. Today, as e& enterprise, we blend the strength of a telco with the agility of a managed service provider, helping businesses build a better tomorrow. In 2022, Etisalat transformed into e&, merging various business models into a global technology and investment conglomerate, diversifying into segments such as Etisalat UAE, e& international, e& life, e& capital, and e& enterprise previously known as Etisalat Digital.', 'eand', '2025-03-05 03:11:22', 188, 'e&_enterprise', 'https://www.eandenterprise.com/en/about-us.html'),
(3, '67c7c0dd1f208d60dd0099c0', 'Mobile & Roaming Services\nConnecting mobile customers around the world\nWith more than 780 mobile partners, our mobility services offer a multilateral roaming service and enable a one-stop shop to mobile customers around the world. Signalling services & VAS\nWe are a one-stop shop for mobile operators, enabling 2/3G roaming services with global reach for more than 700 mobile operators along with value-added services. Our SS7 Signalling service is essential for establishing highest quality international roaming and with ANSI signalling service we enable roaming of the GSM mobile operators in the North American region.\nRoaming Steering Tool\nA reliable steering tool, Proactively steering the roaming traffic to the preferred network, based on quality of service and commercial\nSignalling Analytics\nFull reporting and notification systems, Generating reports and alarms-notification to guarantee the QoS and identify the silent roamers in real-time base; presenting different KPIs\nSS7 Signalling Firewall\nA great support system, Recognised as one of the best telecom innovative solution\nOur Services\nAntispam Policy\nClick here to download the SMS service Antispam Policy\nDownload PDF\nContact Sales\nShare your details and our sales team will get back to you.\nRequest A Call Back\n¬© 2025 e&. All Rights Reserved.\nCareers Terms & Conditions Privacy Policy Code of Conduct', 'eand', '2025-03-05 03:11:25', 188, 'carrier_and_wholesale', 'https://www.eand.com/en/whoweare/carrier-and-wholesale/services/mobile-and-roaming.html')"#;

/// Write both sample files into `dir`, returning their paths.
pub fn create_sample_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut created = Vec::new();
    for (name, data) in [(ADDONS_SAMPLE_FILE, ADDONS_SAMPLE), (BIO_SAMPLE_FILE, BIO_SAMPLE)] {
        let path = dir.join(name);
        fs::write(&path, data)?;
        created.push(path);
    }
    Ok(created)
}
