//! Subset of the IANA IPFIX Information Elements registry.

use crate::field_type::FieldType;

pub(super) static ELEMENTS: &[(u16, &str, FieldType)] = &[
    (1, "octetDeltaCount", FieldType::Uint64),
    (2, "packetDeltaCount", FieldType::Uint64),
    (3, "deltaFlowCount", FieldType::Uint64),
    (4, "protocolIdentifier", FieldType::Uint8),
    (5, "ipClassOfService", FieldType::Uint8),
    (6, "tcpControlBits", FieldType::Uint16),
    (7, "sourceTransportPort", FieldType::Uint16),
    (8, "sourceIPv4Address", FieldType::Ipv4Address),
    (9, "sourceIPv4PrefixLength", FieldType::Uint8),
    (10, "ingressInterface", FieldType::Uint32),
    (11, "destinationTransportPort", FieldType::Uint16),
    (12, "destinationIPv4Address", FieldType::Ipv4Address),
    (13, "destinationIPv4PrefixLength", FieldType::Uint8),
    (14, "egressInterface", FieldType::Uint32),
    (15, "ipNextHopIPv4Address", FieldType::Ipv4Address),
    (16, "bgpSourceAsNumber", FieldType::Uint32),
    (17, "bgpDestinationAsNumber", FieldType::Uint32),
    (18, "bgpNextHopIPv4Address", FieldType::Ipv4Address),
    (19, "postMCastPacketDeltaCount", FieldType::Uint64),
    (20, "postMCastOctetDeltaCount", FieldType::Uint64),
    (21, "flowEndSysUpTime", FieldType::Uint32),
    (22, "flowStartSysUpTime", FieldType::Uint32),
    (23, "postOctetDeltaCount", FieldType::Uint64),
    (24, "postPacketDeltaCount", FieldType::Uint64),
    (25, "minimumIpTotalLength", FieldType::Uint64),
    (26, "maximumIpTotalLength", FieldType::Uint64),
    (27, "sourceIPv6Address", FieldType::Ipv6Address),
    (28, "destinationIPv6Address", FieldType::Ipv6Address),
    (29, "sourceIPv6PrefixLength", FieldType::Uint8),
    (30, "destinationIPv6PrefixLength", FieldType::Uint8),
    (31, "flowLabelIPv6", FieldType::Uint32),
    (32, "icmpTypeCodeIPv4", FieldType::Uint16),
    (33, "igmpType", FieldType::Uint8),
    (34, "samplingInterval", FieldType::Uint32),
    (35, "samplingAlgorithm", FieldType::Uint8),
    (36, "flowActiveTimeout", FieldType::Uint16),
    (37, "flowInactiveTimeout", FieldType::Uint16),
    (38, "engineType", FieldType::Uint8),
    (39, "engineId", FieldType::Uint8),
    (40, "exportedOctetTotalCount", FieldType::Uint64),
    (41, "exportedMessageTotalCount", FieldType::Uint64),
    (42, "exportedFlowRecordTotalCount", FieldType::Uint64),
    (43, "ipv4RouterSc", FieldType::Ipv4Address),
    (44, "sourceIPv4Prefix", FieldType::Ipv4Address),
    (45, "destinationIPv4Prefix", FieldType::Ipv4Address),
    (46, "mplsTopLabelType", FieldType::Uint8),
    (47, "mplsTopLabelIPv4Address", FieldType::Ipv4Address),
    (48, "samplerId", FieldType::Uint8),
    (49, "samplerMode", FieldType::Uint8),
    (50, "samplerRandomInterval", FieldType::Uint32),
    (51, "classId", FieldType::Uint8),
    (52, "minimumTTL", FieldType::Uint8),
    (53, "maximumTTL", FieldType::Uint8),
    (54, "fragmentIdentification", FieldType::Uint32),
    (55, "postIpClassOfService", FieldType::Uint8),
    (56, "sourceMacAddress", FieldType::MacAddress),
    (57, "postDestinationMacAddress", FieldType::MacAddress),
    (58, "vlanId", FieldType::Uint16),
    (59, "postVlanId", FieldType::Uint16),
    (60, "ipVersion", FieldType::Uint8),
    (61, "flowDirection", FieldType::Uint8),
    (62, "ipNextHopIPv6Address", FieldType::Ipv6Address),
    (63, "bgpNextHopIPv6Address", FieldType::Ipv6Address),
    (64, "ipv6ExtensionHeaders", FieldType::Uint32),
    (70, "mplsTopLabelStackSection", FieldType::OctetArray),
    (71, "mplsLabelStackSection2", FieldType::OctetArray),
    (72, "mplsLabelStackSection3", FieldType::OctetArray),
    (80, "destinationMacAddress", FieldType::MacAddress),
    (81, "postSourceMacAddress", FieldType::MacAddress),
    (82, "interfaceName", FieldType::String),
    (83, "interfaceDescription", FieldType::String),
    (85, "octetTotalCount", FieldType::Uint64),
    (86, "packetTotalCount", FieldType::Uint64),
    (88, "fragmentOffset", FieldType::Uint16),
    (89, "forwardingStatus", FieldType::Uint8),
    (90, "mplsVpnRouteDistinguisher", FieldType::OctetArray),
    (94, "applicationDescription", FieldType::String),
    (95, "applicationId", FieldType::OctetArray),
    (96, "applicationName", FieldType::String),
    (98, "postIpDiffServCodePoint", FieldType::Uint8),
    (99, "multicastReplicationFactor", FieldType::Uint32),
    (128, "bgpNextAdjacentAsNumber", FieldType::Uint32),
    (129, "bgpPrevAdjacentAsNumber", FieldType::Uint32),
    (130, "exporterIPv4Address", FieldType::Ipv4Address),
    (131, "exporterIPv6Address", FieldType::Ipv6Address),
    (132, "droppedOctetDeltaCount", FieldType::Uint64),
    (133, "droppedPacketDeltaCount", FieldType::Uint64),
    (136, "flowEndReason", FieldType::Uint8),
    (137, "commonPropertiesId", FieldType::Uint64),
    (138, "observationPointId", FieldType::Uint64),
    (139, "icmpTypeCodeIPv6", FieldType::Uint16),
    (144, "exportingProcessId", FieldType::Uint32),
    (148, "flowId", FieldType::Uint64),
    (149, "observationDomainId", FieldType::Uint32),
    (150, "flowStartSeconds", FieldType::DateTimeSeconds),
    (151, "flowEndSeconds", FieldType::DateTimeSeconds),
    (152, "flowStartMilliseconds", FieldType::DateTimeMilliseconds),
    (153, "flowEndMilliseconds", FieldType::DateTimeMilliseconds),
    (154, "flowStartMicroseconds", FieldType::DateTimeMicroseconds),
    (155, "flowEndMicroseconds", FieldType::DateTimeMicroseconds),
    (156, "flowStartNanoseconds", FieldType::DateTimeNanoseconds),
    (157, "flowEndNanoseconds", FieldType::DateTimeNanoseconds),
    (158, "flowStartDeltaMicroseconds", FieldType::Uint32),
    (159, "flowEndDeltaMicroseconds", FieldType::Uint32),
    (160, "systemInitTimeMilliseconds", FieldType::DateTimeMilliseconds),
    (161, "flowDurationMilliseconds", FieldType::Uint32),
    (162, "flowDurationMicroseconds", FieldType::Uint32),
    (176, "icmpTypeIPv4", FieldType::Uint8),
    (177, "icmpCodeIPv4", FieldType::Uint8),
    (178, "icmpTypeIPv6", FieldType::Uint8),
    (179, "icmpCodeIPv6", FieldType::Uint8),
    (184, "tcpSequenceNumber", FieldType::Uint32),
    (185, "tcpAcknowledgementNumber", FieldType::Uint32),
    (186, "tcpWindowSize", FieldType::Uint16),
    (192, "ipTTL", FieldType::Uint8),
    (195, "ipDiffServCodePoint", FieldType::Uint8),
    (196, "ipPrecedence", FieldType::Uint8),
    (210, "paddingOctets", FieldType::OctetArray),
    (224, "ipTotalLength", FieldType::Uint64),
    (225, "postNATSourceIPv4Address", FieldType::Ipv4Address),
    (226, "postNATDestinationIPv4Address", FieldType::Ipv4Address),
    (227, "postNAPTSourceTransportPort", FieldType::Uint16),
    (228, "postNAPTDestinationTransportPort", FieldType::Uint16),
    (230, "natEvent", FieldType::Uint8),
    (234, "ingressVRFID", FieldType::Uint32),
    (235, "egressVRFID", FieldType::Uint32),
    (236, "VRFname", FieldType::String),
    (239, "biflowDirection", FieldType::Uint8),
    (243, "dot1qVlanId", FieldType::Uint16),
    (244, "dot1qPriority", FieldType::Uint8),
    (276, "dataRecordsReliability", FieldType::Boolean),
    (281, "postNATSourceIPv6Address", FieldType::Ipv6Address),
    (282, "postNATDestinationIPv6Address", FieldType::Ipv6Address),
    (313, "ipHeaderPacketSection", FieldType::OctetArray),
    (320, "absoluteError", FieldType::Float64),
    (321, "relativeError", FieldType::Float64),
    (322, "observationTimeSeconds", FieldType::DateTimeSeconds),
    (323, "observationTimeMilliseconds", FieldType::DateTimeMilliseconds),
    (324, "observationTimeMicroseconds", FieldType::DateTimeMicroseconds),
    (325, "observationTimeNanoseconds", FieldType::DateTimeNanoseconds),
    (434, "mibObjectValueInteger", FieldType::Int32),
    (458, "sourceTransportPortsLimit", FieldType::Uint16),
    (459, "httpRequestMethod", FieldType::String),
    (460, "httpRequestHost", FieldType::String),
    (461, "httpRequestTarget", FieldType::String),
    (462, "httpMessageVersion", FieldType::String),
];
