/// Converts a camelCase element name to a snake_case column name.
///
/// Words break only where a lowercase letter or digit is followed by a
/// capital, so acronym runs stay whole (`VRFname` → `vrfname`,
/// `postMCastPacketDeltaCount` → `post_mcast_packet_delta_count`). Any
/// other non-alphanumeric character becomes a separator.
pub fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 8);
    let mut prev: Option<char> = None;

    for c in name.chars() {
        if !c.is_ascii_alphanumeric() {
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            prev = None;
            continue;
        }

        let boundary = c.is_ascii_uppercase()
            && prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit());
        if boundary {
            out.push('_');
        }
        out.push(c.to_ascii_lowercase());
        prev = Some(c);
    }

    while out.ends_with('_') {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_iana_names() {
        let cases = [
            ("octetDeltaCount", "octet_delta_count"),
            ("sourceIPv4Address", "source_ipv4_address"),
            ("destinationIPv6PrefixLength", "destination_ipv6_prefix_length"),
            ("postNATSourceIPv4Address", "post_natsource_ipv4_address"),
            ("postMCastPacketDeltaCount", "post_mcast_packet_delta_count"),
            ("VRFname", "vrfname"),
            ("ingressVRFID", "ingress_vrfid"),
            ("minimumTTL", "minimum_ttl"),
            ("dot1qVlanId", "dot1q_vlan_id"),
            ("mplsLabelStackSection2", "mpls_label_stack_section2"),
            ("flowLabelIPv6", "flow_label_ipv6"),
            ("ipTTL", "ip_ttl"),
        ];
        for (input, expected) in cases {
            assert_eq!(snake_case(input), expected, "{input}");
        }
    }

    #[test]
    fn separators_collapse() {
        assert_eq!(snake_case("already_snake"), "already_snake");
        assert_eq!(snake_case("Dotted.Name-here"), "dotted_name_here");
        assert_eq!(snake_case("__lead"), "lead");
        assert_eq!(snake_case(""), "");
    }
}
