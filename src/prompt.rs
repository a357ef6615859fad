use crate::profile::VendorProfile;

/// Render the vendor profile into the risk-assessment prompt. Every field is
/// substituted through [`VendorProfile::field`], so anything the submitter
/// left out shows up as the `[Not Provided]` sentinel and the instructions
/// tell the model how to treat it.
pub fn build_prompt(profile: &VendorProfile) -> String {
    let v = |field: &str| profile.field(field).into_owned();

    format!(
        r#"You are an expert vendor risk analyst. Use the information below to perform a comprehensive risk assessment of the vendor. Reference publicly available data and industry best practices where applicable.

---

🧾 1. Vendor Profile Information
- Vendor Name: {vendor_name}
- Legal Business Name: {vendor_legal_name}
- Website: {vendor_website}
- Primary Contact(s): {vendor_contacts}
- Type of Service: {vendor_service_type}
- Geographic Locations (Ops/Data Centers): {vendor_geographic_scope}
- Length and Terms of Relationship: {vendor_relationship_terms}

---

🔍 2. Due Diligence and Background Checks
- Business Credit Report: {vendor_credit_report_summary}
- Litigation or Legal History: {vendor_litigation_summary}
- Ownership & Parent Companies: {vendor_ownership_structure}
- Watchlist / Sanctions Screening: {vendor_watchlist_status}
- Media & Reputation Scan: {vendor_reputation_summary}

---

🔐 3. Information Security Controls
- Data Encryption Practices: {vendor_encryption_practices}
- Network Security (firewalls, IDS/IPS): {vendor_network_security}
- Endpoint Protection: {vendor_endpoint_protection}
- Access Control & MFA: {vendor_access_controls}
- Logging/Monitoring Practices: {vendor_logging_monitoring}
- Secure SDLC / DevSecOps Maturity: {vendor_sdllc_practices}

---

☁️ 4. Data Handling and Privacy
- Data Classification & Segregation: {vendor_data_classification}
- Data Residency / Jurisdiction: {vendor_data_residency}
- Data Retention & Destruction Policy: {vendor_data_retention}
- Privacy Compliance (e.g., GDPR, CCPA, HIPAA): {vendor_privacy_compliance}
- Use of Subcontractors / 4th Parties: {vendor_subcontractors}

---

🧪 5. Compliance and Certifications
- SOC Reports: {vendor_soc_certifications}
- ISO Certifications: {vendor_iso_certifications}
- FedRAMP / NIST Alignment: {vendor_fedramp_nist_status}
- Other Frameworks (PCI-DSS, HIPAA, HITRUST): {vendor_other_certifications}
- External Pen Tests / Vulnerability Scans: {vendor_pentest_status}

---

🧯 6. Incident Management
- Breach History: {vendor_breach_history}
- Incident Response Plan Status: {vendor_irp_status}
- Detection/Containment Metrics: {vendor_ttd_ttc}
- Notification & Escalation Protocols: {vendor_notification_procedures}

---

💼 7. Business Continuity & Disaster Recovery
- BCP/DRP Documentation: {vendor_bcp_drp_status}
- RTO & RPO: {vendor_rto_rpo}
- DR/BCP Testing Frequency: {vendor_bcp_testing}
- Geo-Redundancy Capabilities: {vendor_geo_redundancy}

---

👥 8. Human Resources and Training
- Background Checks on Employees: {vendor_background_checks}
- Security Awareness Training: {vendor_security_training}
- Insider Threat Mitigation Strategies: {vendor_insider_threat_mitigation}
- Role-Based Access Control (RBAC): {vendor_rbac_controls}

---

💲 9. Financial Risk and Stability
- Balance Sheet / Income Statement Insights: {vendor_financials_summary}
- Profitability & Cash Flow: {vendor_profitability_analysis}
- Insurance Coverage (cyber, liability): {vendor_insurance_coverage}

---

⚖️ 10. Legal and Contractual Risk
- MSA / DPA Review Notes: {vendor_contract_summary}
- Termination / Liability Clauses: {vendor_termination_liability}
- SLA Terms: {vendor_sla_summary}
- Audit Rights: {vendor_audit_rights}

---

📊 11. Risk Scoring and Tiering
- Inherent Risk (Before Controls): {vendor_inherent_risk_score}
- Residual Risk (After Controls): {vendor_residual_risk_score}
- Tier Recommendation (Critical/High/Medium/Low): {vendor_risk_tier}
- Justification Summary: {vendor_risk_summary_justification}

---

🔗 12. External Sources and Supporting Links
Provide direct URLs to relevant vendor documentation, if available.

- SOC 2 Type II Report: {vendor_soc2_link}
- ISO 27001 Certification: {vendor_iso27001_link}
- Breach Disclosure Report: {vendor_breach_link}
- Security Practices / Trust Center: {vendor_security_page}
- Privacy Policy or Compliance Statement: {vendor_privacy_policy}

---

Instructions:
- Include direct references or links to any public reports, press coverage, filings, or certifications you find.
- Be objective, cite sources where possible, and summarize key risk indicators across financial, legal, technical, and reputational domains.
- Add links to any information for SOC 2 Type 2 Reports or ISO 27001 Reports.
- If any section lacks sufficient information, explicitly note it as "Insufficient data available." Do not speculate or fabricate findings. Recommend next steps to gather the missing data if appropriate.
- If any field is missing, marked "[Not Provided]", or cannot be found, clearly state "Insufficient information available" in your analysis. Do not speculate.
- For each section, provide a short summary and a risk score (1-10 scale) if applicable.
- Return the findings in a structured format suitable for posting as a Jira ticket comment."#,
        vendor_name = v("vendor_name"),
        vendor_legal_name = v("vendor_legal_name"),
        vendor_website = v("vendor_website"),
        vendor_contacts = v("vendor_contacts"),
        vendor_service_type = v("vendor_service_type"),
        vendor_geographic_scope = v("vendor_geographic_scope"),
        vendor_relationship_terms = v("vendor_relationship_terms"),
        vendor_credit_report_summary = v("vendor_credit_report_summary"),
        vendor_litigation_summary = v("vendor_litigation_summary"),
        vendor_ownership_structure = v("vendor_ownership_structure"),
        vendor_watchlist_status = v("vendor_watchlist_status"),
        vendor_reputation_summary = v("vendor_reputation_summary"),
        vendor_encryption_practices = v("vendor_encryption_practices"),
        vendor_network_security = v("vendor_network_security"),
        vendor_endpoint_protection = v("vendor_endpoint_protection"),
        vendor_access_controls = v("vendor_access_controls"),
        vendor_logging_monitoring = v("vendor_logging_monitoring"),
        vendor_sdllc_practices = v("vendor_sdllc_practices"),
        vendor_data_classification = v("vendor_data_classification"),
        vendor_data_residency = v("vendor_data_residency"),
        vendor_data_retention = v("vendor_data_retention"),
        vendor_privacy_compliance = v("vendor_privacy_compliance"),
        vendor_subcontractors = v("vendor_subcontractors"),
        vendor_soc_certifications = v("vendor_soc_certifications"),
        vendor_iso_certifications = v("vendor_iso_certifications"),
        vendor_fedramp_nist_status = v("vendor_fedramp_nist_status"),
        vendor_other_certifications = v("vendor_other_certifications"),
        vendor_pentest_status = v("vendor_pentest_status"),
        vendor_breach_history = v("vendor_breach_history"),
        vendor_irp_status = v("vendor_irp_status"),
        vendor_ttd_ttc = v("vendor_ttd_ttc"),
        vendor_notification_procedures = v("vendor_notification_procedures"),
        vendor_bcp_drp_status = v("vendor_bcp_drp_status"),
        vendor_rto_rpo = v("vendor_rto_rpo"),
        vendor_bcp_testing = v("vendor_bcp_testing"),
        vendor_geo_redundancy = v("vendor_geo_redundancy"),
        vendor_background_checks = v("vendor_background_checks"),
        vendor_security_training = v("vendor_security_training"),
        vendor_insider_threat_mitigation = v("vendor_insider_threat_mitigation"),
        vendor_rbac_controls = v("vendor_rbac_controls"),
        vendor_financials_summary = v("vendor_financials_summary"),
        vendor_profitability_analysis = v("vendor_profitability_analysis"),
        vendor_insurance_coverage = v("vendor_insurance_coverage"),
        vendor_contract_summary = v("vendor_contract_summary"),
        vendor_termination_liability = v("vendor_termination_liability"),
        vendor_sla_summary = v("vendor_sla_summary"),
        vendor_audit_rights = v("vendor_audit_rights"),
        vendor_inherent_risk_score = v("vendor_inherent_risk_score"),
        vendor_residual_risk_score = v("vendor_residual_risk_score"),
        vendor_risk_tier = v("vendor_risk_tier"),
        vendor_risk_summary_justification = v("vendor_risk_summary_justification"),
        vendor_soc2_link = v("vendor_soc2_link"),
        vendor_iso27001_link = v("vendor_iso27001_link"),
        vendor_breach_link = v("vendor_breach_link"),
        vendor_security_page = v("vendor_security_page"),
        vendor_privacy_policy = v("vendor_privacy_policy"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{VendorProfile, MISSING_FIELD};
    use serde_json::json;

    #[test]
    fn provided_fields_are_substituted() {
        let profile: VendorProfile = serde_json::from_value(json!({
            "vendor_name": "Acme Corp",
            "vendor_risk_tier": "High"
        }))
        .unwrap();

        let prompt = build_prompt(&profile);
        assert!(prompt.contains("- Vendor Name: Acme Corp"));
        assert!(prompt.contains("- Tier Recommendation (Critical/High/Medium/Low): High"));
    }

    #[test]
    fn absent_fields_render_the_sentinel() {
        let prompt = build_prompt(&VendorProfile::default());
        assert!(prompt.contains(&format!("- Vendor Name: {MISSING_FIELD}")));
        assert!(prompt.contains(&format!("- SOC 2 Type II Report: {MISSING_FIELD}")));
    }

    #[test]
    fn all_sections_are_present() {
        let prompt = build_prompt(&VendorProfile::default());
        for section in [
            "1. Vendor Profile Information",
            "2. Due Diligence and Background Checks",
            "3. Information Security Controls",
            "4. Data Handling and Privacy",
            "5. Compliance and Certifications",
            "6. Incident Management",
            "7. Business Continuity & Disaster Recovery",
            "8. Human Resources and Training",
            "9. Financial Risk and Stability",
            "10. Legal and Contractual Risk",
            "11. Risk Scoring and Tiering",
            "12. External Sources and Supporting Links",
        ] {
            assert!(prompt.contains(section), "missing section: {section}");
        }
    }
}
